use crate::prelude::*;

/// Parser that matches a single ASCII whitespace character (space, tab, newline, carriage return)
pub fn whitespace<'code>() -> impl Parser<'code, Element = u8, Output = u8> {
    one_of(b" \t\n\r")
}

/// Parser that matches a line ending: `\r\n`, `\n` or a lone `\r`
pub fn line_ending<'code>() -> impl Parser<'code, Element = u8, Output = &'code [u8]> {
    literal(b"\r\n").or(literal(b"\n")).or(literal(b"\r"))
}

/// Parser that skips zero or more whitespace characters
pub fn spaces<'code>() -> impl Parser<'code, Element = u8, Output = ()> {
    whitespace().many().ignore()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_kinds() {
        for data in [&b" a"[..], b"\ta", b"\na", b"\ra"] {
            let (ws, cursor) = whitespace().parse(Cursor::new(data)).unwrap();
            assert_eq!(ws, data[0]);
            assert_eq!(cursor.value().unwrap(), b'a');
        }
    }

    #[test]
    fn test_whitespace_non_whitespace_fails() {
        assert!(whitespace().parse(Cursor::new(b"abc")).is_err());
    }

    #[test]
    fn test_line_ending_prefers_crlf() {
        let (ending, cursor) = line_ending().parse(Cursor::new(b"\r\nx")).unwrap();
        assert_eq!(ending, b"\r\n");
        assert_eq!(cursor.value().unwrap(), b'x');

        let (ending, _) = line_ending().parse(Cursor::new(b"\rx")).unwrap();
        assert_eq!(ending, b"\r");
    }

    #[test]
    fn test_lines() {
        let line = none_of(b"\r\n").many().recognize();
        let lines = separated_list(line, line_ending());
        let text = b"one\r\ntwo\nthree";
        let result = parse(&lines, text).unwrap();
        assert_eq!(result, vec![&b"one"[..], b"two", b"three"]);
    }

    #[test]
    fn test_spaces() {
        let ((), cursor) = spaces().parse(Cursor::new(b" \t\n x")).unwrap();
        assert_eq!(cursor.value().unwrap(), b'x');
        assert!(spaces().parse(Cursor::new(b"x")).is_ok());
    }
}
