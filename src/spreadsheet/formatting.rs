/*!
 * Inline markup parsing for spreadsheet cells.
 *
 * Cell text copied out of Markdown or HTML tables may still carry
 * lightweight markup. This module strips it and reports which runs of the
 * remaining text were bold, italic or struck through:
 *
 * - `***text***` bold and italic
 * - `**text**`, `<b>`, `<strong>` bold
 * - `*text*`, `<i>`, `<em>` italic
 * - `~~text~~`, `<s>`, `<del>`, `<strike>` strikethrough
 *
 * Markers stack and nest (`**~~x~~**`, `*a **b** c*`, `***a** b*`).
 * Asterisk and tilde runs pair up the way CommonMark pairs emphasis
 * delimiters: a run can open when it is left-flanking, close when it is
 * right-flanking, and each closer takes the nearest compatible opener.
 * An HTML closing tag only pairs with an opening tag of the same name.
 * Anything left unpaired is kept as literal text.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Asterisk runs, tilde runs and the recognized HTML tags
static DELIMITER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*+|~+|<(/?)((?i:b|strong|i|em|s|del|strike))>")
        .expect("Invalid cell delimiter regex")
});

const BOLD: TextStyle = TextStyle { bold: true, italic: false, strikethrough: false };
const ITALIC: TextStyle = TextStyle { bold: false, italic: true, strikethrough: false };
const STRIKETHROUGH: TextStyle = TextStyle { bold: false, italic: false, strikethrough: true };

/// Font flags of a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
}

impl TextStyle {
    /// True when no flag is set
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.strikethrough)
    }

    /// Union of both styles' flags
    pub fn merge(self, other: TextStyle) -> TextStyle {
        TextStyle {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            strikethrough: self.strikethrough || other.strikethrough,
        }
    }
}

/// A styled run of display text within a cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
}

impl Segment {
    fn new(text: String, style: TextStyle) -> Self {
        Self {
            text,
            bold: style.bold,
            italic: style.italic,
            strikethrough: style.strikethrough,
        }
    }

    pub fn style(&self) -> TextStyle {
        TextStyle {
            bold: self.bold,
            italic: self.italic,
            strikethrough: self.strikethrough,
        }
    }
}

/// Result of parsing one cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCell {
    /// Visible text with all marker syntax removed
    pub text: String,
    /// Ordered runs whose texts concatenate to `text`; never empty
    pub segments: Vec<Segment>,
}

impl ParsedCell {
    /// Style of the leading run, used as the style of the whole cell
    pub fn first_style(&self) -> TextStyle {
        self.segments
            .first()
            .map(Segment::style)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Asterisk,
    Tilde,
}

impl Mark {
    fn symbol(self) -> &'static str {
        match self {
            Self::Asterisk => "*",
            Self::Tilde => "~",
        }
    }
}

/// A run of identical delimiter characters
#[derive(Debug, Clone, Copy)]
struct DelimiterRun {
    mark: Mark,
    // @field: Characters not yet consumed by a pairing
    remaining: usize,
    can_open: bool,
    can_close: bool,
}

impl DelimiterRun {
    fn new(mark: Mark, len: usize, prev: Option<char>, next: Option<char>) -> Self {
        // Start and end of the cell count as whitespace.
        let is_space = |c: Option<char>| c.is_none_or(char::is_whitespace);
        let is_punct =
            |c: Option<char>| c.is_some_and(|c| !c.is_alphanumeric() && !c.is_whitespace());

        let left_flanking = !is_space(next) && (!is_punct(next) || is_space(prev) || is_punct(prev));
        let right_flanking = !is_space(prev) && (!is_punct(prev) || is_space(next) || is_punct(next));

        Self {
            mark,
            remaining: len,
            can_open: left_flanking,
            can_close: right_flanking,
        }
    }
}

#[derive(Debug, Clone)]
struct HtmlTag<'a> {
    source: &'a str,
    name: String,
    style: TextStyle,
    closing: bool,
    matched: bool,
}

#[derive(Debug, Clone)]
enum Token<'a> {
    Text(&'a str),
    Run(DelimiterRun),
    Tag(HtmlTag<'a>),
}

/// A matched opener/closer pair, by token index
#[derive(Debug, Clone, Copy)]
struct Span {
    open: usize,
    close: usize,
    style: TextStyle,
}

/// Cell markup parser
pub struct CellFormat;

impl CellFormat {
    /// Parse one raw cell value into display text and styled segments.
    ///
    /// A value without markup yields a single plain segment equal to the
    /// input, including the empty string.
    pub fn parse(raw: &str) -> ParsedCell {
        let mut tokens = Self::tokenize(raw);
        let spans = Self::pair_up(&mut tokens);

        let mut segments = Vec::new();
        for (i, token) in tokens.iter().enumerate() {
            let style = spans
                .iter()
                .filter(|span| span.open < i && i < span.close)
                .fold(TextStyle::default(), |acc, span| acc.merge(span.style));

            match token {
                Token::Text(text) => Self::push_run(text, style, &mut segments),
                Token::Run(run) if run.remaining > 0 => {
                    Self::push_run(&run.mark.symbol().repeat(run.remaining), style, &mut segments)
                }
                Token::Tag(tag) if !tag.matched => Self::push_run(tag.source, style, &mut segments),
                _ => {}
            }
        }

        if segments.is_empty() {
            segments.push(Segment::new(String::new(), TextStyle::default()));
        }

        let text = segments.iter().map(|s| s.text.as_str()).collect();
        ParsedCell { text, segments }
    }

    fn tokenize(text: &str) -> Vec<Token<'_>> {
        let mut tokens = Vec::new();
        let mut last = 0;

        for caps in DELIMITER_REGEX.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last {
                tokens.push(Token::Text(&text[last..whole.start()]));
            }

            let source = whole.as_str();
            let token = match caps.get(2) {
                Some(name) => {
                    let name = name.as_str().to_ascii_lowercase();
                    let style = match name.as_str() {
                        "b" | "strong" => BOLD,
                        "i" | "em" => ITALIC,
                        _ => STRIKETHROUGH,
                    };
                    Token::Tag(HtmlTag {
                        source,
                        name,
                        style,
                        closing: caps.get(1).is_some_and(|slash| !slash.as_str().is_empty()),
                        matched: false,
                    })
                }
                // Only double tildes mark strikethrough.
                None if source.starts_with('~') && source.len() != 2 => Token::Text(source),
                None => {
                    let mark = if source.starts_with('*') { Mark::Asterisk } else { Mark::Tilde };
                    let prev = text[..whole.start()].chars().next_back();
                    let next = text[whole.end()..].chars().next();
                    Token::Run(DelimiterRun::new(mark, source.len(), prev, next))
                }
            };
            tokens.push(token);
            last = whole.end();
        }

        if last < text.len() {
            tokens.push(Token::Text(&text[last..]));
        }
        tokens
    }

    fn pair_up(tokens: &mut [Token<'_>]) -> Vec<Span> {
        let mut openers: Vec<usize> = Vec::new();
        let mut spans = Vec::new();

        for i in 0..tokens.len() {
            match &tokens[i] {
                Token::Text(_) => {}
                Token::Run(run) => {
                    let run = *run;
                    if run.can_close {
                        Self::close_run(tokens, &mut openers, &mut spans, i);
                    }
                    if run.can_open && matches!(tokens[i], Token::Run(rest) if rest.remaining > 0) {
                        openers.push(i);
                    }
                }
                Token::Tag(tag) if !tag.closing => openers.push(i),
                Token::Tag(closer) => {
                    let found = openers.iter().rposition(|&j| {
                        matches!(&tokens[j], Token::Tag(opener) if !opener.closing && opener.name == closer.name)
                    });
                    let Some(pos) = found else {
                        continue;
                    };
                    let j = openers[pos];
                    spans.push(Span {
                        open: j,
                        close: i,
                        style: closer.style,
                    });
                    openers.truncate(pos);
                    for index in [j, i] {
                        if let Token::Tag(tag) = &mut tokens[index] {
                            tag.matched = true;
                        }
                    }
                }
            }
        }

        spans
    }

    /// Pair the closing run at `i` with earlier openers until it is used up
    /// or nothing compatible is left.
    fn close_run(tokens: &mut [Token<'_>], openers: &mut Vec<usize>, spans: &mut Vec<Span>, i: usize) {
        loop {
            let Token::Run(closer) = tokens[i] else {
                return;
            };
            if closer.remaining == 0 {
                return;
            }

            let found = openers.iter().rposition(|&j| {
                matches!(tokens[j], Token::Run(opener) if opener.mark == closer.mark && opener.remaining > 0)
            });
            let Some(pos) = found else {
                return;
            };
            let j = openers[pos];
            let Token::Run(opener) = tokens[j] else {
                return;
            };

            let (used, style) = match closer.mark {
                Mark::Tilde => (2, STRIKETHROUGH),
                Mark::Asterisk if opener.remaining >= 2 && closer.remaining >= 2 => (2, BOLD),
                Mark::Asterisk => (1, ITALIC),
            };
            spans.push(Span { open: j, close: i, style });

            for index in [j, i] {
                if let Token::Run(run) = &mut tokens[index] {
                    run.remaining -= used;
                }
            }

            // Openers between the pair can no longer be closed.
            openers.truncate(pos + 1);
            if opener.remaining == used {
                openers.pop();
            }
        }
    }

    // Adjacent runs with the same style are merged.
    fn push_run(text: &str, style: TextStyle, out: &mut Vec<Segment>) {
        if text.is_empty() {
            return;
        }
        match out.last_mut() {
            Some(previous) if previous.style() == style => previous.text.push_str(text),
            _ => out.push(Segment::new(text.to_string(), style)),
        }
    }
}
