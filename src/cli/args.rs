use crate::types::{Cents, MoneyOverrides};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Convert between smallest-unit integers and money strings
#[derive(Parser, Debug)]
#[command(name = "easy-money")]
#[command(about = "Convert between smallest-unit integers and money strings", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format an integer amount for display
    Format {
        /// Amount in the smallest unit; omit for an absent value
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: Option<Cents>,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Parse a money string into the smallest unit
    Parse {
        /// Money string, e.g. "$1,234.56" or "4.56 CR"
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Render an integer amount through a printf-style pattern
    Pattern {
        /// Amount in the smallest unit
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: Cents,

        /// Pattern such as "%07.2m"
        #[arg(value_name = "PATTERN")]
        pattern: String,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Convert the amount column of an id,amount CSV file
    Batch {
        /// Input CSV file path
        #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
        input_file: PathBuf,

        /// Conversion direction
        #[arg(
            long = "direction",
            value_name = "DIRECTION",
            default_value = "to-money",
            help = "'to-money' formats integers, 'to-cents' parses money strings"
        )]
        direction: Direction,

        #[command(flatten)]
        options: OptionArgs,
    },
}

/// Batch conversion direction
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    ToMoney,
    ToCents,
}

/// Formatting options shared by every subcommand
#[derive(Args, Debug, Default, Clone)]
pub struct OptionArgs {
    /// Digits implied after the decimal point (default: 2)
    #[arg(long)]
    pub precision: Option<u32>,

    /// Character used in place of the decimal point
    #[arg(long)]
    pub separator: Option<String>,

    /// Character inserted between groups of 3 digits
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Pattern for positive values
    #[arg(long, allow_hyphen_values = true)]
    pub positive: Option<String>,

    /// Pattern for negative values
    #[arg(long, allow_hyphen_values = true)]
    pub negative: Option<String>,

    /// Pattern for zero
    #[arg(long, allow_hyphen_values = true)]
    pub zero: Option<String>,

    /// Pattern for absent values
    #[arg(long, allow_hyphen_values = true)]
    pub nil: Option<String>,

    /// Prefix such as "$"
    #[arg(long)]
    pub unit: Option<String>,

    /// Parse result for input without digits
    #[arg(long, allow_hyphen_values = true)]
    pub blank: Option<Cents>,

    /// Regular expression detecting credit notation
    #[arg(long = "negative-regex")]
    pub negative_regex: Option<String>,
}

impl OptionArgs {
    /// Collect the flags that were given into an overrides record
    pub fn to_overrides(&self) -> MoneyOverrides {
        MoneyOverrides {
            precision: self.precision,
            separator: self.separator.clone(),
            delimiter: self.delimiter.clone(),
            positive: self.positive.clone(),
            negative: self.negative.clone(),
            zero: self.zero.clone(),
            nil: self.nil.clone(),
            unit: self.unit.clone(),
            blank: self.blank,
            negative_regex: self.negative_regex.clone(),
        }
    }
}

impl Command {
    pub fn options(&self) -> &OptionArgs {
        match self {
            Command::Format { options, .. }
            | Command::Parse { options, .. }
            | Command::Pattern { options, .. }
            | Command::Batch { options, .. } => options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::format_value(&["easy-money", "format", "12345"], Some(12345))]
    #[case::format_negative(&["easy-money", "format", "-150"], Some(-150))]
    #[case::format_absent(&["easy-money", "format"], None)]
    fn test_format_parsing(#[case] args: &[&str], #[case] expected: Option<Cents>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match parsed.command {
            Command::Format { value, .. } => assert_eq!(value, expected),
            other => panic!("Expected Format, got {:?}", other),
        }
    }

    #[rstest]
    #[case::plain(&["easy-money", "parse", "$1.23"], "$1.23")]
    #[case::leading_minus(&["easy-money", "parse", "-4.56CR"], "-4.56CR")]
    fn test_parse_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match parsed.command {
            Command::Parse { text, .. } => assert_eq!(text, expected),
            other => panic!("Expected Parse, got {:?}", other),
        }
    }

    #[rstest]
    #[case::default_direction(&["easy-money", "batch", "input.csv"], Direction::ToMoney)]
    #[case::to_cents(&["easy-money", "batch", "--direction", "to-cents", "input.csv"], Direction::ToCents)]
    #[case::to_money(&["easy-money", "batch", "--direction", "to-money", "input.csv"], Direction::ToMoney)]
    fn test_direction_parsing(#[case] args: &[&str], #[case] expected: Direction) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match parsed.command {
            Command::Batch { direction, .. } => assert_eq!(direction, expected),
            other => panic!("Expected Batch, got {:?}", other),
        }
    }

    #[test]
    fn test_option_flags_to_overrides() {
        let parsed = CliArgs::try_parse_from([
            "easy-money",
            "format",
            "100",
            "--precision",
            "3",
            "--separator",
            ",",
            "--delimiter",
            ".",
            "--unit",
            "$",
            "--negative",
            "%.3f CR",
            "--blank",
            "-1",
        ])
        .unwrap();

        let overrides = parsed.command.options().to_overrides();
        assert_eq!(
            overrides,
            MoneyOverrides::new()
                .precision(3)
                .separator(",")
                .delimiter(".")
                .unit("$")
                .negative("%.3f CR")
                .blank(-1)
        );
    }

    #[test]
    fn test_no_flags_gives_empty_overrides() {
        let parsed = CliArgs::try_parse_from(["easy-money", "pattern", "12345", "%m"]).unwrap();
        assert_eq!(parsed.command.options().to_overrides(), MoneyOverrides::new());
    }

    #[rstest]
    #[case::missing_subcommand(&["easy-money"])]
    #[case::missing_text(&["easy-money", "parse"])]
    #[case::invalid_direction(&["easy-money", "batch", "--direction", "sideways", "input.csv"])]
    #[case::non_integer_value(&["easy-money", "format", "1.5"])]
    #[case::negative_precision(&["easy-money", "format", "1", "--precision", "-2"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
