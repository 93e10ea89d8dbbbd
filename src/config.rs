use serde::Deserialize;
use visionvault::model::TreeEntry;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub base_url: String,
    /// Root folders listed in the folder tree pane
    #[serde(default)]
    pub folder_tree: Vec<TreeEntry>,
    #[serde(default)]
    pub vim_mode: bool,
    /// Command printing the clipboard image to stdout (whitespace-separated)
    #[serde(default)]
    pub clipboard_command: Option<String>,
    /// Command used to open image URLs
    #[serde(default)]
    pub open_command: Option<String>,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl Config {
    /// Minimal config when only `--url` is given
    pub fn from_url(base_url: String) -> Self {
        Self {
            base_url,
            folder_tree: Vec::new(),
            vim_mode: false,
            clipboard_command: None,
            open_command: None,
            request_timeout_secs: default_request_timeout(),
        }
    }

    /// Clipboard command split into program and arguments, falling back to
    /// the platform default
    pub fn clipboard_argv(&self) -> Option<Vec<String>> {
        match &self.clipboard_command {
            Some(cmd) => {
                let argv: Vec<String> = cmd.split_whitespace().map(str::to_string).collect();
                (!argv.is_empty()).then_some(argv)
            }
            None => visionvault::logic::clipboard::default_clipboard_command(),
        }
    }
}
