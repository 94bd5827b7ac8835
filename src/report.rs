//! Single-line renderings of a reading, compatible with the line formats
//! consumed by existing collectors.

use core::fmt::{self, Write};

use crate::HTU21DResponse;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputFormat {
    Json,
    #[default]
    Tsv,
}

#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub name: &'a str,
    /// Seconds; Unix time on hosted systems, uptime on bare metal.
    pub timestamp: u64,
    pub reading: HTU21DResponse,
}

impl<'a> Report<'a> {
    pub fn new(name: &'a str, timestamp: u64, reading: HTU21DResponse) -> Self {
        Self {
            name,
            timestamp,
            reading,
        }
    }

    pub fn write<W: Write>(&self, format: OutputFormat, w: &mut W) -> fmt::Result {
        match format {
            OutputFormat::Json => self.write_json(w),
            OutputFormat::Tsv => self.write_tsv(w),
        }
    }

    /// `{"<name>": {"time": T, "temperature": C , "humidity": H}}`
    pub fn write_json<W: Write>(&self, w: &mut W) -> fmt::Result {
        w.write_str("{\"")?;
        write_escaped(self.name, w)?;
        writeln!(
            w,
            "\": {{\"time\": {}, \"temperature\": {:.2} , \"humidity\": {:.2}}}}}",
            self.timestamp, self.reading.temperature.celsius, self.reading.humidity
        )
    }

    /// `T<TAB>C<TAB>F<TAB>H`
    pub fn write_tsv<W: Write>(&self, w: &mut W) -> fmt::Result {
        let t = &self.reading.temperature;
        writeln!(
            w,
            "{}\t{:.2}\t{:.2}\t{:.2}",
            self.timestamp, t.celsius, t.fahrenheit, self.reading.humidity
        )
    }
}

fn write_escaped<W: Write>(s: &str, w: &mut W) -> fmt::Result {
    for c in s.chars() {
        match c {
            '"' => w.write_str("\\\"")?,
            '\\' => w.write_str("\\\\")?,
            c => w.write_char(c)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_SENSOR_NAME, Temperature};

    fn reading() -> HTU21DResponse {
        HTU21DResponse {
            temperature: Temperature {
                celsius: 21.4571,
                fahrenheit: 70.6228,
            },
            humidity: 45.0012,
        }
    }

    #[test]
    fn json_line() {
        let mut out = String::new();
        Report::new(DEFAULT_SENSOR_NAME, 1_700_000_000, reading())
            .write(OutputFormat::Json, &mut out)
            .unwrap();
        assert_eq!(
            out,
            "{\"pi\": {\"time\": 1700000000, \"temperature\": 21.46 , \"humidity\": 45.00}}\n"
        );
    }

    #[test]
    fn tsv_is_the_default() {
        let mut out = String::new();
        Report::new("ignored", 42, reading())
            .write(OutputFormat::default(), &mut out)
            .unwrap();
        assert_eq!(out, "42\t21.46\t70.62\t45.00\n");
    }

    #[test]
    fn json_name_is_escaped() {
        let mut out = String::new();
        Report::new("a\"b\\c", 0, reading()).write_json(&mut out).unwrap();
        assert!(out.starts_with("{\"a\\\"b\\\\c\": "));
    }

    #[test]
    fn negative_values_keep_sign() {
        let r = HTU21DResponse {
            temperature: Temperature {
                celsius: -46.85,
                fahrenheit: -52.33,
            },
            humidity: -6.0,
        };
        let mut out = String::new();
        Report::new("pi", 1, r).write_tsv(&mut out).unwrap();
        assert_eq!(out, "1\t-46.85\t-52.33\t-6.00\n");
    }
}
