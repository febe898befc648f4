//! Static content of the Help tab.

pub const HELP_TITLE: &str = "📘 Instructions";

pub const HELP_STEPS: [&str; 4] = [
    "Enter your credentials in the Credentials tab.",
    "Test connections using the provided buttons.",
    "Go to Products tab and fetch your Shopify products.",
    "Review and migrate them to WooCommerce.",
];

/// Full instructions text as rendered on the Help tab.
pub fn help_text() -> String {
    let mut text = format!("{HELP_TITLE}\n\n");
    for (i, step) in HELP_STEPS.iter().enumerate() {
        text.push_str(&format!("Step {}: {}\n", i + 1, step));
    }
    text
}
