use nutype::nutype;

pub const MAX_NAME_LENGTH: usize = 256;

/// Name of a container or scratch entry within a file.
///
/// Names are path components of the file hierarchy, so `/` is rejected.
#[nutype(
    sanitize(trim),
    validate(
        not_empty,
        len_char_max = MAX_NAME_LENGTH,
        predicate = |s: &str| !s.contains('/')
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Name(String);
