pub const APP_TITLE: &str = "Auto DM";
pub const APP_SUBTITLE: &str = "Automate your direct messages";

pub const LABEL_IDENTIFIER: &str = "Recipient";
pub const LABEL_MESSAGE: &str = "Message (shared by single and bulk add)";
pub const LABEL_BULK: &str = "Recipients (one per line)";
pub const LABEL_STATUS: &str = "Status";
pub const LABEL_NOTES: &str = "Important Notes";

pub const BUTTON_ADD_SINGLE: &str = "Ctrl+A Add to Queue";
pub const BUTTON_ADD_BULK: &str = "Ctrl+B Add Bulk Recipients";
pub const SEND_SHORTCUT: &str = "Ctrl+S";

pub const KEY_HINTS: &str =
    "Tab/Shift+Tab focus | Up/Down select | Del remove | Ctrl+S send | Esc quit";

pub const NOTES: &[&str] = &[
    "This is a demo showing the UI for automated direct messages; nothing is really sent",
    "Official messaging APIs restrict automated DMs",
    "A real implementation would need business API access",
    "Always comply with the platform's terms of service and rate limits",
    "Use automation responsibly to avoid account restrictions",
];
