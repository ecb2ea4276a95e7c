#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the file at `path` and encode it for transport.
    LoadImage { path: String },
    /// Run one analysis call for `image`, stamped with `generation`.
    Analyze {
        generation: crate::Generation,
        image: crate::CapturedImage,
    },
}
