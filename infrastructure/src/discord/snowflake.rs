use domain::ports::discord::DiscordError;
use std::num::NonZeroU64;

/// Discord ids are non-zero 64-bit integers sent as decimal strings.
pub fn parse_snowflake(id: &str) -> Result<NonZeroU64, DiscordError> {
    id.parse::<NonZeroU64>().map_err(|_| DiscordError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_snowflake() {
        let id = parse_snowflake("80351110224678912").unwrap();
        assert_eq!(id.get(), 80351110224678912);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        for id in ["0", "", "abc", "-1", "12 34", "18446744073709551616"] {
            assert!(
                matches!(parse_snowflake(id), Err(DiscordError::InvalidId(ref s)) if s == id),
                "{id:?} should be rejected",
            );
        }
    }
}
