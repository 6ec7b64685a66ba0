//! SHA ranges bounding each release bucket.

/// Symbolic ref used as the newer end of the Unreleased range.
pub const HEAD: &str = "HEAD";

/// Length of the SHA prefixes used in link references.
const SHORT_SHA_LEN: usize = 7;

/// The `(label, from, to)` triple used to build one comparison link.
///
/// `from_sha` is the newer end of the range (a release commit or [`HEAD`]) and
/// `to_sha` the older end, matching the newest-first walk that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRange {
    /// Bucket label (`Unreleased` or the release id).
    pub label: String,

    /// SHA at the newer end of the bucket.
    pub from_sha: String,

    /// SHA at the older end of the bucket.
    pub to_sha: String,
}

impl LinkRange {
    /// Creates a new range.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        from_sha: impl Into<String>,
        to_sha: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            from_sha: from_sha.into(),
            to_sha: to_sha.into(),
        }
    }

    /// Returns `(older, newer)` shortened to 7 characters.
    ///
    /// This is the order comparison URLs expect.
    #[must_use]
    pub fn compare_pair(&self) -> (&str, &str) {
        (short(&self.to_sha), short(&self.from_sha))
    }
}

fn short(sha: &str) -> &str {
    sha.char_indices()
        .nth(SHORT_SHA_LEN)
        .map_or(sha, |(idx, _)| &sha[..idx])
}

/// Ranges collected in bucket emission order, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkRanges {
    ranges: Vec<LinkRange>,
}

impl LinkRanges {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a range. No deduplication is performed.
    pub fn track(&mut self, range: LinkRange) {
        self.ranges.push(range);
    }

    /// Iterates ranges in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, LinkRange> {
        self.ranges.iter()
    }

    /// Returns the number of tracked ranges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if nothing has been tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl<'a> IntoIterator for &'a LinkRanges {
    type Item = &'a LinkRange;
    type IntoIter = std::slice::Iter<'a, LinkRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
