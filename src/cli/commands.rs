//! CLI Command Implementations
//!
//! Each command returns the lines it wants printed so the logic stays testable.

use tracing::info;

use super::{Kind, ModifierArgs};
use crate::error::Result;
use crate::list::TriList;
use crate::modifier::{offset, scale};
use crate::storage::Element;

/// The list type the demo works with.
pub type DemoList = TriList<i64, String, f64>;

/// Build a list from command-line tokens.
///
/// A token that parses as an integer is stored as one, then reals, and
/// everything else is kept as text.
pub fn parse_tokens(tokens: &[String]) -> DemoList {
    let mut list = DemoList::new();
    list.reserve(tokens.len());
    for token in tokens {
        if let Ok(int) = token.parse::<i64>() {
            list.push(int);
        } else if let Ok(real) = token.parse::<f64>() {
            list.push(real);
        } else {
            list.push(token.clone());
        }
    }
    list
}

/// Install the modifiers requested on the command line.
pub fn install_modifiers(list: &DemoList, args: &ModifierArgs) {
    if let Some(amount) = args.add {
        list.compose_front::<i64, _>(offset(amount));
    }
    if let Some(factor) = args.scale {
        list.compose_front::<f64, _>(scale(factor));
    }
    if let Some(suffix) = args.suffix.clone() {
        list.compose_front::<String, _>(move |text| text + &suffix);
    }
}

fn describe(element: &Element<i64, String, f64>) -> String {
    match element {
        Element::First(int) => format!("int  {}", int),
        Element::Second(text) => format!("text {}", text),
        Element::Third(real) => format!("real {}", real),
    }
}

/// Every element in insertion order, walked with a cursor.
pub fn show(list: &DemoList) -> Result<Vec<String>> {
    info!(len = list.len(), "showing list");

    let mut lines = Vec::with_capacity(list.len());
    let mut cursor = list.begin();
    let end = list.end();
    while cursor != end {
        lines.push(describe(&cursor.get()?));
        cursor.move_next()?;
    }
    Ok(lines)
}

/// Only the values of one payload type.
pub fn view(list: &DemoList, kind: Kind) -> Vec<String> {
    info!(?kind, "viewing list");

    match kind {
        Kind::Int => list.view::<i64, _>().iter().map(|v| v.to_string()).collect(),
        Kind::Text => list.view::<String, _>().to_vec(),
        Kind::Real => list.view::<f64, _>().iter().map(|v| v.to_string()).collect(),
    }
}

/// Push 1, "x", 2.0, 3, then compose +1, compose *10 and reset the integer slot,
/// recording the integer view after each step.
pub fn scenario() -> Vec<String> {
    let tokens: Vec<String> = ["1", "x", "2.0", "3"].iter().map(|s| s.to_string()).collect();
    let list = parse_tokens(&tokens);
    let ints = list.view::<i64, _>();

    let mut lines = Vec::new();
    let mut record = |step: &str| lines.push(format!("{:<16}{:?}", step, ints.to_vec()));

    record("initial");
    list.compose_front::<i64, _>(|x| x + 1);
    record("compose x+1");
    list.compose_front::<i64, _>(|x| x * 10);
    record("compose x*10");
    list.reset::<i64, _>();
    record("reset");

    lines
}
