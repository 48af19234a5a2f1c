use constcat::concat;

mod components;
mod landing;
mod pages;
mod variables;

use components::BASE_COMPONENTS;
use landing::LANDING_STYLES;
use pages::PAGE_STYLES;
use variables::CSS_VARIABLES;

// everything the app needs in one sheet
pub const APP_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

button, input, textarea {
  font-family: inherit;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    LANDING_STYLES,
    PAGE_STYLES,
);
