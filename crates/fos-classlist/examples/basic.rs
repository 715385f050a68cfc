//! Example: classList on HTML and SVG elements
//!
//! Run with `RUST_LOG=fos_classlist=debug` to see every attribute write.

use fos_classlist::host::AttributeAccess;
use fos_classlist::{class_list, HtmlElement, Regex, SvgElement};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut button = HtmlElement::new("button").with_class("btn item-1 item-2");
    {
        let mut classes = class_list(&mut button)?;
        classes.add("btn-primary")?;
        classes.remove(&Regex::new("^item-")?)?;
        classes.toggle("active", None)?;
        println!("button: {:?}", classes.to_array());
    }

    let mut circle = SvgElement::new("circle");
    circle.set_attribute("class", "  marker  hidden ");
    {
        let mut classes = class_list(&mut circle)?;
        classes.toggle("hidden", Some(false))?;
        println!("circle contains 'marker': {}", classes.contains("marker")?);
    }
    println!("circle class attribute: {:?}", circle.get_attribute("class"));

    if let Err(err) = class_list(&mut button)?.add("two words") {
        println!("{:?}: {}", err.kind(), err);
    }

    Ok(())
}
