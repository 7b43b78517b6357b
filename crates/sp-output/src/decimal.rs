//! Locale-style decimal formatting for matrix cells.

/// Fixed-precision decimal formatting with a configurable separator.
///
/// Values are rounded to `max_fraction_digits`, trailing zeros (and a bare
/// separator) are dropped, and `.` is replaced by `separator`:
///
/// | value      | default output |
/// |------------|----------------|
/// | `1.0`      | `1`            |
/// | `1.4142`   | `1,414`        |
/// | `0.25`     | `0,25`         |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalFormat {
    pub separator:           char,
    pub max_fraction_digits: usize,
}

impl DecimalFormat {
    pub fn new(separator: char, max_fraction_digits: usize) -> Self {
        Self { separator, max_fraction_digits }
    }

    pub fn format(&self, value: f64) -> String {
        let mut s = format!("{:.*}", self.max_fraction_digits, value);
        if s.contains('.') {
            let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
            s.truncate(trimmed);
        }
        if s == "-0" {
            s.remove(0);
        }
        if self.separator != '.' {
            s = s.replace('.', self.separator.encode_utf8(&mut [0; 4]));
        }
        s
    }
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self { separator: ',', max_fraction_digits: 3 }
    }
}
