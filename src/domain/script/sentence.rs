//! Sentence Boundary Scanner - 句末边界扫描
//!
//! 句末标点之后紧跟的右引号、右括号一并归入当前句。

/// 句末标点
#[inline]
pub fn is_terminal_punct(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '！' | '？' | '。' | '…')
}

/// 句末标点之后可以跟随的闭合字符
#[inline]
pub fn is_trailing_closer(ch: char) -> bool {
    matches!(
        ch,
        '\u{2019}' // ’
            | '\u{201D}' // ”
            | '"'
            | '\''
            | ')'
            | '］'
            | '〕'
            | '〉'
            | '》'
            | '」'
            | '『'
            | '』'
            | '】'
            | ']'
    )
}

/// 句末位置
///
/// `byte` 用于切片，`chars` 用于与字符数上限比较。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceEnd {
    pub byte: usize,
    pub chars: usize,
}

/// 逐个产出句末位置的扫描器
///
/// 最后一个位置总是字符串末尾（文本不以句末结束时补一个合成边界）。
pub struct SentenceEnds<'a> {
    text: &'a str,
    iter: std::iter::Peekable<std::str::CharIndices<'a>>,
    chars: usize,
    last: Option<usize>,
    done: bool,
}

impl<'a> SentenceEnds<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            iter: text.char_indices().peekable(),
            chars: 0,
            last: None,
            done: false,
        }
    }
}

impl Iterator for SentenceEnds<'_> {
    type Item = SentenceEnd;

    fn next(&mut self) -> Option<SentenceEnd> {
        if self.done {
            return None;
        }
        while let Some((_, ch)) = self.iter.next() {
            self.chars += 1;
            if !is_terminal_punct(ch) {
                continue;
            }
            while let Some(&(_, next)) = self.iter.peek() {
                if !is_trailing_closer(next) {
                    break;
                }
                self.iter.next();
                self.chars += 1;
            }
            let byte = self.iter.peek().map_or(self.text.len(), |&(i, _)| i);
            self.last = Some(byte);
            return Some(SentenceEnd {
                byte,
                chars: self.chars,
            });
        }

        self.done = true;
        if self.last == Some(self.text.len()) {
            return None;
        }
        Some(SentenceEnd {
            byte: self.text.len(),
            chars: self.chars,
        })
    }
}

/// 所有合法切分点（字节偏移），升序且不重复，最后一个总是 `text.len()`
pub fn sentence_end_offsets(text: &str) -> Vec<usize> {
    SentenceEnds::new(text).map(|end| end.byte).collect()
}

/// 在不超过 `limit` 个字符的前提下找最靠后的切分点
///
/// 没有满足上限的切分点时退而取第一个切分点，
/// 因此超长的单句整体成为一段，不会产生空段。
pub fn cut_point(text: &str, limit: usize) -> SentenceEnd {
    let mut ends = SentenceEnds::new(text);
    // 迭代器至少产出一个位置（字符串末尾）
    let mut cut = ends.next().unwrap_or(SentenceEnd {
        byte: text.len(),
        chars: 0,
    });
    if cut.chars > limit {
        return cut;
    }
    for end in ends {
        if end.chars > limit {
            break;
        }
        cut = end;
    }
    cut
}
