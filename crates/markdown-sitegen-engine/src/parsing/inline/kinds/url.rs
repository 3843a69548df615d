/// URL heuristic shared by image and link patterns.
///
/// Accepts `http(s)://` URLs whose host has a dot (`http://google.com`) or
/// is followed by a path (`http://x/y.png`), and root-relative paths
/// (`/google.com`). Bare words like `asd` or `http://example` are rejected.
pub const PATTERN: &str = r"(?:https?://[A-Za-z0-9-]+(?:(?:\.[A-Za-z0-9-]+)+(?:/[^\s()]*)?|/[^\s()]*)|/[^\s()]*)";
