use crate::cli::{Cli, Command, HouseholdsCommand, ValidIngredientsCommand};

use clap::Parser;

/// **VALUE**: Global flags are accepted after the subcommand.
///
/// **BUG THIS CATCHES**: Would catch `global = true` being dropped from
/// `--config-dir`, which makes `mealplan households list --config-dir x` fail.
#[test]
fn given_global_flags_after_subcommand_when_parsed_then_captured() {
    // WHEN
    let cli = Cli::try_parse_from([
        "mealplan",
        "households",
        "list",
        "--page",
        "3",
        "--config-dir",
        "/tmp/mealplan",
        "-v",
    ])
    .unwrap();

    // THEN
    assert_eq!(
        cli.config_dir.as_deref(),
        Some(std::path::Path::new("/tmp/mealplan"))
    );
    assert!(cli.verbose);
    let Command::Households(HouseholdsCommand::List(page)) = cli.command else {
        panic!("expected households list");
    };
    assert_eq!(page.page, Some(3));
    assert_eq!(page.limit, None);
}

/// **VALUE**: Out-of-range limits are rejected before any request is made.
///
/// **BUG THIS CATCHES**: Would catch the range parser being removed, letting
/// `--limit 0` through to a server that treats it as "use the default".
#[test]
fn given_limit_out_of_range_when_parsed_then_rejected() {
    for limit in ["0", "251"] {
        let result = Cli::try_parse_from(["mealplan", "households", "list", "--limit", limit]);
        assert!(result.is_err(), "limit {limit} should be rejected");
    }
}

/// **VALUE**: Page numbers start at 1 on the command line too.
///
/// **BUG THIS CATCHES**: Would catch `--page 0` being sent as `page=0`, a
/// value the filter builder itself refuses.
#[test]
fn given_page_zero_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["mealplan", "households", "list", "--page", "0"]);
    assert!(result.is_err(), "page 0 should be rejected");

    let cli = Cli::try_parse_from(["mealplan", "households", "list", "--page", "1"]).unwrap();
    let Command::Households(HouseholdsCommand::List(page)) = cli.command else {
        panic!("expected households list");
    };
    assert_eq!(page.page, Some(1));
}

#[test]
fn given_valid_ingredients_search_when_parsed_then_query_kept_verbatim() {
    let cli = Cli::try_parse_from([
        "mealplan",
        "valid-ingredients",
        "search",
        "red onion",
        "--limit",
        "5",
    ])
    .unwrap();

    let Command::ValidIngredients(ValidIngredientsCommand::Search { query, page }) = cli.command
    else {
        panic!("expected valid-ingredients search");
    };
    assert_eq!(query, "red onion");
    assert_eq!(page.limit, Some(5));
}

#[test]
fn given_households_get_without_id_when_parsed_then_rejected() {
    assert!(Cli::try_parse_from(["mealplan", "households", "get"]).is_err());
}
