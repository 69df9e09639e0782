//! Scene Label - 场景标签值对象
//!
//! 规范形式为 `"장면 0NN"`，编号补零到 3 位。

use serde::{Serialize, Serializer};
use std::fmt;

use super::errors::ParseError;

/// 场景编号上限（最多 3 位数字）
pub const MAX_SCENE_NUMBER: u16 = 999;

/// 场景标签前缀
pub const SCENE_WORD: &str = "장면";

/// 规范化的场景标签
///
/// 只能由匹配到的数字派生，排序与相等性都按数值比较。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneLabel(u16);

impl SceneLabel {
    pub fn new(number: u32) -> Result<Self, ParseError> {
        if number > MAX_SCENE_NUMBER as u32 {
            return Err(ParseError::InvalidSceneNumber(number));
        }
        Ok(Self(number as u16))
    }

    /// 从正则捕获的 1~3 位数字构造
    ///
    /// `"3"`、`"03"`、`"003"` 得到同一个标签。
    pub(crate) fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || digits.len() > 3 {
            return None;
        }
        digits.parse::<u16>().ok().map(Self)
    }

    pub fn number(&self) -> u16 {
        self.0
    }

    /// 3 位补零编号，用作导出 id 和文件名
    pub fn id(&self) -> String {
        format!("{:03}", self.0)
    }

    /// 规范标题行 `[장면 0NN]`
    pub fn header(&self) -> String {
        format!("[{}]", self)
    }
}

impl fmt::Display for SceneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:03}", SCENE_WORD, self.0)
    }
}

impl Serialize for SceneLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
