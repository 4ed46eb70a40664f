use csv::StringRecord;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::model::{channel, dtv_multiplex};

/// Every row belongs to the one configured video source.
pub const SOURCE_ID: i32 = 1;

/// One scanner output row, decoded into guide-database terms.
///
/// Field layout is positional and headerless: transport id, network id,
/// frequency (tens of kHz), symbol rate (hundreds of symbols/s), polarity
/// flag, modulation-system flag, one unused column, service id, channel
/// number, then the service name.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRecord {
    pub transport_id: i32,
    pub network_id: i32,
    pub frequency: i32,
    pub symbol_rate: i32,
    pub polarity: &'static str,
    pub mod_sys: &'static str,
    pub service_id: i32,
    pub channel_number: i32,
    pub name: String,
}

impl ScanRecord {
    pub fn from_csv(row: &StringRecord) -> Self {
        let field = |index: usize| row.get(index).unwrap_or("");
        ScanRecord {
            transport_id: to_int(field(0)),
            network_id: to_int(field(1)),
            frequency: narrow(to_i64(field(2)).saturating_mul(10)),
            symbol_rate: narrow(to_i64(field(3)).saturating_mul(100)),
            polarity: if to_int(field(4)) == 0 { "h" } else { "v" },
            mod_sys: if to_int(field(5)) == 0 { "DVB-S" } else { "DVB-S2" },
            service_id: to_int(field(7)),
            channel_number: to_int(field(8)),
            name: field(9).to_owned(),
        }
    }

    /// Multiplex insert values; the database assigns `mplexid`.
    pub fn multiplex(&self) -> dtv_multiplex::ActiveModel {
        dtv_multiplex::ActiveModel {
            mplexid: NotSet,
            sourceid: Set(SOURCE_ID),
            transportid: Set(self.transport_id),
            networkid: Set(self.network_id),
            frequency: Set(self.frequency),
            symbolrate: Set(self.symbol_rate),
            polarity: Set(self.polarity.to_owned()),
            mod_sys: Set(self.mod_sys.to_owned()),
            hierarchy: Set("a".to_owned()),
            modulation: Set("qpsk".to_owned()),
            constellation: Set("qpsk".to_owned()),
        }
    }

    /// Channel insert values bound to an already-resolved multiplex.
    pub fn channel(&self, mplexid: i32) -> channel::ActiveModel {
        channel::ActiveModel {
            chanid: Set(self.channel_number),
            channum: Set(self.channel_number),
            sourceid: Set(SOURCE_ID),
            callsign: Set(self.name.clone()),
            name: Set(self.name.clone()),
            useonairguide: Set(false),
            mplexid: Set(mplexid),
            serviceid: Set(self.service_id),
        }
    }
}

/// Permissive integer parse: optional leading whitespace and sign, then the
/// longest ASCII digit prefix. Anything else is 0, never an error; values
/// outside the target range saturate.
fn to_int(text: &str) -> i32 {
    narrow(to_i64(text))
}

/// Wide intermediate so scaled fields can multiply before narrowing.
fn to_i64(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }
    match digits.parse::<i64>() {
        Ok(value) => {
            if negative {
                -value
            } else {
                value
            }
        }
        // Only overflow can fail here; the prefix is all digits.
        Err(_) => {
            if negative {
                i64::MIN
            } else {
                i64::MAX
            }
        }
    }
}

fn narrow(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn decodes_a_full_scanner_row() {
        let record = ScanRecord::from_csv(&row(&[
            "100",
            "5",
            "1150",
            "220",
            "0",
            "1",
            "0",
            "99",
            "801",
            "Channel One",
        ]));
        assert_eq!(record.transport_id, 100);
        assert_eq!(record.network_id, 5);
        assert_eq!(record.frequency, 11500);
        assert_eq!(record.symbol_rate, 22000);
        assert_eq!(record.polarity, "h");
        assert_eq!(record.mod_sys, "DVB-S2");
        assert_eq!(record.service_id, 99);
        assert_eq!(record.channel_number, 801);
        assert_eq!(record.name, "Channel One");
    }

    #[test]
    fn polarity_is_horizontal_only_for_zero() {
        assert_eq!(ScanRecord::from_csv(&row(&["1", "1", "1", "1", "0"])).polarity, "h");
        assert_eq!(ScanRecord::from_csv(&row(&["1", "1", "1", "1", "1"])).polarity, "v");
        assert_eq!(ScanRecord::from_csv(&row(&["1", "1", "1", "1", "2"])).polarity, "v");
    }

    #[test]
    fn modulation_system_is_dvb_s_only_for_zero() {
        let s = ScanRecord::from_csv(&row(&["1", "1", "1", "1", "0", "0"]));
        assert_eq!(s.mod_sys, "DVB-S");
        let s2 = ScanRecord::from_csv(&row(&["1", "1", "1", "1", "0", "3"]));
        assert_eq!(s2.mod_sys, "DVB-S2");
    }

    #[test]
    fn frequency_and_symbol_rate_are_scaled() {
        let record = ScanRecord::from_csv(&row(&["1", "1", "1234", "275"]));
        assert_eq!(record.frequency, 12340);
        assert_eq!(record.symbol_rate, 27500);
    }

    #[test]
    fn missing_fields_read_as_zero_or_empty() {
        let record = ScanRecord::from_csv(&row(&["42"]));
        assert_eq!(record.transport_id, 42);
        assert_eq!(record.network_id, 0);
        assert_eq!(record.frequency, 0);
        assert_eq!(record.symbol_rate, 0);
        assert_eq!(record.polarity, "h");
        assert_eq!(record.mod_sys, "DVB-S");
        assert_eq!(record.service_id, 0);
        assert_eq!(record.channel_number, 0);
        assert_eq!(record.name, "");
    }

    #[test]
    fn to_int_takes_the_leading_digit_prefix() {
        assert_eq!(to_int("100"), 100);
        assert_eq!(to_int("  7"), 7);
        assert_eq!(to_int("12abc"), 12);
        assert_eq!(to_int("-5"), -5);
        assert_eq!(to_int("+9"), 9);
        assert_eq!(to_int("abc"), 0);
        assert_eq!(to_int(""), 0);
        assert_eq!(to_int("-"), 0);
    }

    #[test]
    fn to_int_saturates_out_of_range_values() {
        assert_eq!(to_int("2147483648"), i32::MAX);
        assert_eq!(to_int("-2147483649"), i32::MIN);
        assert_eq!(to_int("99999999999999999999"), i32::MAX);
        assert_eq!(to_int("-99999999999999999999"), i32::MIN);
    }

    #[test]
    fn oversized_scaled_fields_saturate_instead_of_wrapping() {
        let record = ScanRecord::from_csv(&row(&["1", "1", "214748365", "21474837"]));
        assert_eq!(record.frequency, i32::MAX);
        assert_eq!(record.symbol_rate, i32::MAX);

        let record = ScanRecord::from_csv(&row(&["1", "1", "-214748365", "1"]));
        assert_eq!(record.frequency, i32::MIN);
    }

    #[test]
    fn multiplex_values_carry_the_fixed_tuning_constants() {
        let record = ScanRecord::from_csv(&row(&["100", "5", "1150", "220", "1", "0"]));
        let multiplex = record.multiplex();
        assert_eq!(multiplex.sourceid, Set(SOURCE_ID));
        assert_eq!(multiplex.transportid, Set(100));
        assert_eq!(multiplex.polarity, Set("v".to_owned()));
        assert_eq!(multiplex.hierarchy, Set("a".to_owned()));
        assert_eq!(multiplex.modulation, Set("qpsk".to_owned()));
        assert_eq!(multiplex.constellation, Set("qpsk".to_owned()));
        assert_eq!(multiplex.mplexid, NotSet);
    }

    #[test]
    fn channel_values_reference_the_resolved_multiplex() {
        let record = ScanRecord::from_csv(&row(&[
            "100", "5", "1150", "220", "0", "1", "0", "99", "801", "Channel One",
        ]));
        let channel = record.channel(7);
        assert_eq!(channel.chanid, Set(801));
        assert_eq!(channel.channum, Set(801));
        assert_eq!(channel.callsign, Set("Channel One".to_owned()));
        assert_eq!(channel.name, Set("Channel One".to_owned()));
        assert_eq!(channel.useonairguide, Set(false));
        assert_eq!(channel.mplexid, Set(7));
        assert_eq!(channel.serviceid, Set(99));
    }
}
