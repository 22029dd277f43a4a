use crate::Real;

/// Assembles the digit string for the operand being typed.
///
/// Digit-by-digit input lives outside the engine: the brain only ever sees
/// the finished number, harvested with [`OperandEntry::value`] when an
/// operator key arrives. The buffer also doubles as the display register,
/// showing the last result between entries.
#[derive(Clone, Debug, Default)]
pub struct OperandEntry {
    text: String,
    typing: bool,
}

impl OperandEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a digit (or decimal point) to the operand in progress,
    /// starting a fresh operand if the user was not already typing. A
    /// second decimal point in the same operand is rejected.
    pub fn press(&mut self, key: char) {
        if key == '.' && self.typing && self.text.contains('.') {
            return;
        }
        if self.typing {
            self.text.push(key);
        } else {
            self.text.clear();
            self.text.push(key);
            self.typing = true;
        }
    }

    /// Removes the last typed character. Returns `true` if a character was
    /// consumed; `false` means there was nothing left to delete and the
    /// caller should fall back to the engine's structural undo instead.
    pub fn backspace(&mut self) -> bool {
        if !self.typing {
            return false;
        }
        self.text.pop();
        if self.text.is_empty() {
            self.typing = false;
        }
        true
    }

    /// True while the user is mid-number; operator keys harvest the operand
    /// and stop typing via [`OperandEntry::value`] + [`OperandEntry::show`].
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// The buffer as a number. An empty or unparseable buffer (such as a
    /// bare `.`) reads as zero; entry input never faults.
    pub fn value<R: Real>(&self) -> R {
        self.text.parse().ok().unwrap_or_else(R::zero)
    }

    /// Replaces the buffer with a finished value, e.g. a result produced by
    /// the engine, and ends the typing run.
    pub fn show<R: Real>(&mut self, value: R) {
        self.text = format!("{value}");
        self.typing = false;
    }

    /// The display text; an empty buffer shows `0`.
    pub fn text(&self) -> &str {
        if self.text.is_empty() {
            "0"
        } else {
            &self.text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_accumulate_while_typing() {
        let mut entry = OperandEntry::new();
        entry.press('4');
        entry.press('2');
        entry.press('.');
        entry.press('5');
        assert_eq!(entry.text(), "42.5");
        assert_eq!(entry.value::<f64>(), 42.5);
    }

    #[test]
    fn second_decimal_point_is_rejected() {
        let mut entry = OperandEntry::new();
        for key in ['1', '.', '5', '.'] {
            entry.press(key);
        }
        assert_eq!(entry.text(), "1.5");
    }

    #[test]
    fn showing_a_result_ends_the_typing_run() {
        let mut entry = OperandEntry::new();
        entry.press('9');
        entry.show(14.0_f64);
        assert!(!entry.is_typing());
        assert_eq!(entry.text(), "14");

        // The next digit starts a fresh operand rather than appending.
        entry.press('3');
        assert_eq!(entry.text(), "3");
    }

    #[test]
    fn backspace_falls_through_once_empty() {
        let mut entry = OperandEntry::new();
        entry.press('7');
        entry.press('8');
        assert!(entry.backspace());
        assert_eq!(entry.text(), "7");
        assert!(entry.backspace());
        assert_eq!(entry.text(), "0");
        assert!(!entry.backspace());
        assert_eq!(entry.value::<f64>(), 0.0);
    }

    #[test]
    fn bare_point_reads_as_zero() {
        let mut entry = OperandEntry::new();
        entry.press('.');
        assert_eq!(entry.value::<f64>(), 0.0);
    }
}
