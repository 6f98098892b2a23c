use crate::field::FieldName;
use crate::tag::GenericTag;

/// Which half of a disc number a raw field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscPart {
    /// Current disc, possibly already in `current/total` form.
    Number,
    /// Disc count only.
    Total,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Staged {
    raw_names: Vec<String>,
    value: String,
    part: DiscPart,
}

impl Staged {
    fn single(raw_name: &str, value: &str, part: DiscPart) -> Self {
        Self {
            raw_names: vec![raw_name.to_string()],
            value: value.to_string(),
            part,
        }
    }

    fn is_composite(&self) -> bool {
        self.value.contains('/')
    }

    fn combined(&self, raw_name: &str, value: String) -> Self {
        let mut raw_names = self.raw_names.clone();
        if !raw_names.iter().any(|n| n == raw_name) {
            raw_names.push(raw_name.to_string());
        }
        Self {
            raw_names,
            value,
            part: DiscPart::Number,
        }
    }
}

/// Resolves competing raw encodings of `ALBUM_DISC_NUMBER` during one conversion.
///
/// A composite `current/total` value is never replaced by a later bare number;
/// otherwise the latest candidate wins. A bare number and a bare total seen in
/// either order combine into `number/total`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscNumberMerge {
    staged: Option<Staged>,
}

impl DiscNumberMerge {
    #[must_use]
    pub fn merge(self, raw_name: &str, part: DiscPart, value: &str) -> Self {
        let candidate = match (&self.staged, part) {
            (Some(staged), DiscPart::Total)
                if staged.part == DiscPart::Number && !staged.is_composite() =>
            {
                staged.combined(raw_name, format!("{}/{value}", staged.value))
            }
            (Some(staged), DiscPart::Number)
                if staged.part == DiscPart::Total && !value.contains('/') =>
            {
                staged.combined(raw_name, format!("{value}/{}", staged.value))
            }
            _ => Staged::single(raw_name, value, part),
        };

        if let Some(staged) = &self.staged
            && staged.is_composite()
            && !candidate.is_composite()
        {
            return self;
        }

        Self {
            staged: Some(candidate),
        }
    }

    /// Currently winning value, if any candidate has been seen.
    #[cfg(test)]
    #[must_use]
    pub(super) fn staged_value(&self) -> Option<&str> {
        self.staged.as_ref().map(|s| s.value.as_str())
    }

    /// Write the winning value into `tag`.
    pub fn finish(self, tag: &mut GenericTag) {
        let Some(staged) = self.staged else {
            return;
        };
        for raw_name in staged.raw_names {
            tag.add_value(FieldName::AlbumDiscNumber, staged.value.clone(), raw_name);
        }
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
