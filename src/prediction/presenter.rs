//! Maps a prediction label to what the result panel shows.

/// Image shown next to a recognized label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultImage {
    Good,
    Poor,
}

impl ResultImage {
    /// Asset file name inside the assets directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Good => "Good.jpg",
            Self::Poor => "Bad.jpg",
        }
    }

    pub fn alt_text(self) -> &'static str {
        match self {
            Self::Good => "Good Air Quality",
            Self::Poor => "Bad Air Quality",
        }
    }
}

/// Rendered form of a prediction result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub headline: String,
    pub image: Option<ResultImage>,
}

/// Build the view for the current label.
///
/// Nothing is shown for an absent or empty label. Images are chosen by exact,
/// case-sensitive match on `"Good"` and `"Poor"`; any other label gets the
/// headline alone.
pub fn present(label: Option<&str>) -> Option<ResultView> {
    let label = label.filter(|label| !label.is_empty())?;
    let image = match label {
        "Good" => Some(ResultImage::Good),
        "Poor" => Some(ResultImage::Poor),
        _ => None,
    };
    Some(ResultView {
        headline: format!("Air Quality is {label}"),
        image,
    })
}
