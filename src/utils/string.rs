// Thu Aug 27 2026 - Alex

pub struct StringUtils;

impl StringUtils {
    pub fn pad_left(s: &str, width: usize, pad_char: char) -> String {
        if s.len() >= width {
            s.to_string()
        } else {
            let padding = pad_char.to_string().repeat(width - s.len());
            format!("{}{}", padding, s)
        }
    }

    pub fn expand_tabs(s: &str, tab_width: usize) -> String {
        s.replace('\t', &" ".repeat(tab_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_left() {
        assert_eq!(StringUtils::pad_left("4 ", 4, ' '), "  4 ");
        assert_eq!(StringUtils::pad_left("1000 ", 4, ' '), "1000 ");
    }

    #[test]
    fn test_expand_tabs() {
        assert_eq!(StringUtils::expand_tabs("a\tb", 8), "a        b");
        assert_eq!(StringUtils::expand_tabs("plain", 8), "plain");
    }
}
