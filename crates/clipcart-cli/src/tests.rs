use super::*;

#[test]
fn parses_items_command() {
    let cli = Cli::try_parse_from(["clipcart", "items", "milk, eggs"])
        .expect("expected valid cli args");

    assert!(matches!(cli.command, Commands::Items { raw } if raw == "milk, eggs"));
}

#[test]
fn parses_request_command_with_retailer() {
    let cli = Cli::try_parse_from(["clipcart", "request", "--retailer", "jewel", "milk"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Request {
            retailer: Some(RetailerArg::Jewel),
            json: false,
            ..
        }
    ));
}

#[test]
fn parses_request_command_without_retailer() {
    let cli =
        Cli::try_parse_from(["clipcart", "request", "milk"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Request { retailer: None, .. }
    ));
}

#[test]
fn parses_json_flag() {
    let cli = Cli::try_parse_from(["clipcart", "request", "--retailer", "marianos", "--json", "milk"])
        .expect("expected valid cli args");

    assert!(matches!(cli.command, Commands::Request { json: true, .. }));
}

#[test]
fn rejects_unknown_retailer() {
    assert!(Cli::try_parse_from(["clipcart", "request", "--retailer", "costco", "milk"]).is_err());
}

#[test]
fn retailer_arg_maps_onto_core_enum() {
    assert_eq!(Retailer::from(RetailerArg::Jewel), Retailer::Jewel);
    assert_eq!(Retailer::from(RetailerArg::Marianos), Retailer::Marianos);
}

#[test]
fn render_skips_empty_requests() {
    let request = CouponRequest::default();
    assert!(render_request(&request, false).is_ok());
    assert!(render_request(&request, true).is_ok());
}
