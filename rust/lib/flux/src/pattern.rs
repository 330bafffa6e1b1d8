/// A parsed path pattern with MQTT-style wildcards.
///
/// - `+` matches exactly one level
/// - `#` matches any number of remaining levels, including zero
///
/// Levels are separated by `/`. Empty levels are ignored, so `a//b`
/// and `a/b` are the same pattern. Segments after `#` are ignored.
///
/// ```ignore
/// let p = Pattern::parse("patients/+");
/// assert!(p.matches("patients/table"));
/// assert!(!p.matches("patients/dialog/save"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Exact(String),
    Single,
    Multi,
}

impl Pattern {
    pub fn parse(raw: &str) -> Self {
        let segments = levels(raw)
            .map(|s| match s {
                "+" => Segment::Single,
                "#" => Segment::Multi,
                other => Segment::Exact(other.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Check whether a concrete path matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let path: Vec<&str> = levels(path).collect();
        match_levels(&self.segments, &path)
    }
}

fn levels(s: &str) -> impl Iterator<Item = &str> {
    s.split('/').filter(|l| !l.is_empty())
}

fn match_levels(segments: &[Segment], path: &[&str]) -> bool {
    match (segments.split_first(), path.split_first()) {
        (None, None) => true,
        (Some((Segment::Multi, _)), _) => true,
        (Some((Segment::Single, rest)), Some((_, path_rest))) => match_levels(rest, path_rest),
        (Some((Segment::Exact(want), rest)), Some((level, path_rest))) => {
            want == level && match_levels(rest, path_rest)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        let p = Pattern::parse("auth/state");
        assert!(p.matches("auth/state"));
        assert!(!p.matches("auth"));
        assert!(!p.matches("auth/state/extra"));
        assert!(!p.matches("auth/other"));
    }

    #[test]
    fn single_level_wildcard() {
        let p = Pattern::parse("shell/+");
        assert!(p.matches("shell/nav"));
        assert!(p.matches("shell/panel"));
        assert!(!p.matches("shell"));
        assert!(!p.matches("shell/nav/items"));
    }

    #[test]
    fn single_level_in_the_middle() {
        let p = Pattern::parse("patients/+/save");
        assert!(p.matches("patients/dialog/save"));
        assert!(!p.matches("patients/dialog/cancel"));
    }

    #[test]
    fn multi_level_wildcard() {
        let p = Pattern::parse("patients/#");
        assert!(p.matches("patients/table"));
        assert!(p.matches("patients/dialog/update-field"));
        // `#` also matches zero remaining levels.
        assert!(p.matches("patients"));
        assert!(!p.matches("shell/nav"));
    }

    #[test]
    fn root_wildcard_matches_everything() {
        let p = Pattern::parse("#");
        assert!(p.matches("app/route"));
        assert!(p.matches("a/b/c/d"));
        assert!(p.matches(""));
    }

    #[test]
    fn empty_levels_ignored() {
        let p = Pattern::parse("/auth//state/");
        assert!(p.matches("auth/state"));
        assert!(!p.matches("auth"));
    }

    #[test]
    fn segments_after_multi_are_ignored() {
        let p = Pattern::parse("auth/#/state");
        assert!(p.matches("auth/anything/at/all"));
    }
}
