/// Bold delimiters. Opening and closing runs are identical.
pub struct Strong;

impl Strong {
    pub const DELIMITERS: [&'static [u8]; 2] = [b"**", b"__"];
}

/// Italic delimiters.
///
/// A doubled delimiter (`**`, `__`) seen by the italic pass is an empty
/// match and stays literal text.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITERS: [u8; 2] = [b'*', b'_'];

    /// The doubled run that the italic pass leaves as literal text.
    pub fn doubled(delim: u8) -> [u8; 2] {
        [delim, delim]
    }
}
