use wardrobe::config::ConfigWarning;

use crate::ui::json::{emit_event, events::ConfigWarningEvent};

pub fn print_config_warnings(warnings: &[ConfigWarning], json: bool) {
    for w in warnings {
        if json {
            let _ = emit_event(&ConfigWarningEvent::from(w));
            continue;
        }

        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
