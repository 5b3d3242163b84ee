use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "order-cache-viewer")]
#[command(about = "A utility that lets you view cached order data", long_about = None)]
pub struct Cli {
    #[arg(value_name = "ORDER_ID", help = "Specify Order ID", value_parser = NonEmptyStringValueParser::new())]
    pub order_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_order_id_is_parsed() {
        let cli = Cli::try_parse_from(["order-cache-viewer", "order-123"]).unwrap();
        assert_eq!(cli.order_id, "order-123");
    }

    #[test]
    fn test_missing_order_id_is_rejected() {
        let err = Cli::try_parse_from(["order-cache-viewer"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_empty_order_id_is_rejected() {
        let err = Cli::try_parse_from(["order-cache-viewer", ""]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_version_flag_is_not_offered() {
        let err = Cli::try_parse_from(["order-cache-viewer", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = Cli::try_parse_from(["order-cache-viewer", "-V", "order-1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_extra_flags_are_rejected() {
        assert!(Cli::try_parse_from(["order-cache-viewer", "--url", "x", "order-1"]).is_err());
    }
}
