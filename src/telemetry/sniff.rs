// Delimiter and header detection from a file's first line.
// Heuristic: comma > semicolon > tab > whitespace; a non-numeric first token marks a header.

/// Field separator chosen for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
    Tab,
    /// No delimiter character: split on runs of whitespace.
    Whitespace,
}

impl Delimiter {
    pub fn as_char(&self) -> Option<char> {
        match self {
            Delimiter::Comma => Some(','),
            Delimiter::Semicolon => Some(';'),
            Delimiter::Tab => Some('\t'),
            Delimiter::Whitespace => None,
        }
    }

    /// Split one line into raw tokens.
    pub fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.as_char() {
            Some(c) => line.split(c).collect(),
            None => line.split_whitespace().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SniffedFormat {
    pub delimiter: Delimiter,
    /// Index of the first data line: 1 when line 0 is a header, else 0.
    pub start_index: usize,
}

impl SniffedFormat {
    pub fn has_header(&self) -> bool {
        self.start_index > 0
    }
}

pub fn sniff_format(first_line: &str) -> SniffedFormat {
    let delimiter = if first_line.contains(',') {
        Delimiter::Comma
    } else if first_line.contains(';') {
        Delimiter::Semicolon
    } else if first_line.contains('\t') {
        Delimiter::Tab
    } else {
        Delimiter::Whitespace
    };

    let first_is_numeric = delimiter
        .tokenize(first_line)
        .first()
        .is_some_and(|t| t.trim().parse::<f64>().is_ok());

    SniffedFormat {
        delimiter,
        start_index: if first_is_numeric { 0 } else { 1 },
    }
}
