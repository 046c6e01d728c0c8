#![deny(warnings)]

use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static UPPER: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn ignore_ws(&mut self) {
        self.skip_all(WHITE);
        self.ignore();
    }

    // scan unsigned numbers like \d*\.\d+ or \d+\.?
    pub fn scan_number(&mut self) -> Option<String> {
        let backtrack = self.buffer_pos();
        let int_part = self.skip_all(DIGITS);
        if self.accept(&'.').is_some() {
            // fractional part is required when there's no integer part
            if !self.skip_all(DIGITS) && !int_part {
                self.set_buffer_pos(backtrack);
                return None;
            }
        } else if !int_part {
            self.set_buffer_pos(backtrack);
            return None;
        }
        Some(self.extract_string())
    }

    pub fn scan_math_op(&mut self) -> Option<String> {
        const OPS: &[char] = &['+', '-', '/', '(', ')', ','];
        if self.accept(&'*').is_some() {
            // accept '*', '**'
            self.accept(&'*');
            Some(self.extract_string())
        } else if self.accept_any(OPS).is_some() {
            Some(self.extract_string())
        } else {
            None
        }
    }

    // a single uppercase ASCII letter, 'AB' scans as two variables
    pub fn scan_variable(&mut self) -> Option<char> {
        let var = self.accept_any(UPPER)?;
        self.ignore();
        Some(var)
    }

    // scan the first of 'words' found verbatim at the cursor
    pub fn scan_keyword(&mut self, words: &[&str]) -> Option<String> {
        for word in words {
            let chars = word.chars().collect::<Vec<_>>();
            if self.accept_seq(&chars) {
                return Some(self.extract_string());
            }
        }
        None
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_number() {
        let tests = vec!["987", "41.98", ".5", "0.25", "12.", "007"];
        for t in tests.iter() {
            let result = Scanner::new(t.chars()).scan_number();
            assert_eq!(Some(t.to_string()), result);
        }
    }

    #[test]
    fn scan_number_stops() {
        let mut s = Scanner::new("3.4e2".chars());
        assert_eq!(s.scan_number(), Some(format!("3.4")));
        assert_eq!(s.next(), Some('e'));

        let mut s = Scanner::new("-5".chars());
        assert_eq!(s.scan_number(), None);
        assert_eq!(s.next(), Some('-'));

        let mut s = Scanner::new(".".chars());
        assert_eq!(s.scan_number(), None);
        assert_eq!(s.next(), Some('.'));
    }

    #[test]
    fn scan_math_ops() {
        let tests = vec!["(", ")", ",", "*", "**", "+", "-", "/"];
        for t in tests.iter() {
            let result = Scanner::new(t.chars()).scan_math_op();
            assert_eq!(Some(t.to_string()), result);
        }
        assert_eq!(Scanner::new("^".chars()).scan_math_op(), None);
        assert_eq!(Scanner::new("%".chars()).scan_math_op(), None);
    }

    #[test]
    fn scan_variables() {
        let mut s = Scanner::new("AB".chars());
        assert_eq!(s.scan_variable(), Some('A'));
        assert_eq!(s.scan_variable(), Some('B'));
        assert_eq!(s.scan_variable(), None);
        assert_eq!(Scanner::new("a".chars()).scan_variable(), None);
    }

    #[test]
    fn scan_keywords() {
        let words = ["sqrt", "sin", "pi"];
        let mut s = Scanner::new("sinsqrtpis".chars());
        assert_eq!(s.scan_keyword(&words), Some(format!("sin")));
        assert_eq!(s.scan_keyword(&words), Some(format!("sqrt")));
        assert_eq!(s.scan_keyword(&words), Some(format!("pi")));
        assert_eq!(s.scan_keyword(&words), None);
        assert_eq!(s.next(), Some('s'));
    }
}
