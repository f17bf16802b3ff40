use image::Rgb;

/// One placeholder image: where it goes and how it looks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpec {
    pub filename: &'static str,
    pub gradient_start: Rgb<u8>,
    pub gradient_end: Rgb<u8>,
    /// Large centered label, one line per `\n`
    pub text: &'static str,
    /// Rendered uppercased in the bottom-left corner
    pub category: &'static str,
}

impl PlaceholderSpec {
    pub fn category_label(&self) -> String {
        self.category.to_uppercase()
    }
}

const fn spec(
    filename: &'static str,
    start: [u8; 3],
    end: [u8; 3],
    text: &'static str,
    category: &'static str,
) -> PlaceholderSpec {
    PlaceholderSpec {
        filename,
        gradient_start: Rgb(start),
        gradient_end: Rgb(end),
        text,
        category,
    }
}

/// The gallery placeholders, in generation order
pub const PLACEHOLDERS: [PlaceholderSpec; 9] = [
    spec("photo1.jpg", [255, 107, 53], [255, 143, 107], "Creative\nDesign", "Photo"),
    spec("photo2.jpg", [74, 144, 226], [123, 179, 255], "UI/UX\nShowcase", "Photo"),
    spec("photo3.jpg", [80, 200, 120], [126, 255, 161], "Brand\nIdentity", "Photo"),
    spec("design1.jpg", [155, 89, 182], [195, 155, 211], "Logo\nDesign", "Design"),
    spec("design2.jpg", [231, 76, 60], [241, 148, 138], "Web\nInterface", "Design"),
    spec("design3.jpg", [243, 156, 18], [248, 196, 113], "Mobile\nApp UI", "Design"),
    spec("video-thumb1.jpg", [52, 73, 94], [93, 109, 126], "Project\nDemo", "Video"),
    spec("video-thumb2.jpg", [22, 160, 133], [72, 201, 176], "Coding\nTutorial", "Video"),
    spec("video-thumb3.jpg", [211, 84, 0], [230, 126, 34], "YouTube\nVideo", "Video"),
];

/// Look up a placeholder by its output filename
pub fn find_placeholder(filename: &str) -> Option<&'static PlaceholderSpec> {
    PLACEHOLDERS.iter().find(|p| p.filename == filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn filenames_are_unique_jpegs() {
        let names: HashSet<_> = PLACEHOLDERS.iter().map(|p| p.filename).collect();
        assert_eq!(names.len(), PLACEHOLDERS.len());
        assert!(PLACEHOLDERS.iter().all(|p| p.filename.ends_with(".jpg")));
    }

    #[test]
    fn every_label_has_two_lines() {
        for p in &PLACEHOLDERS {
            assert_eq!(p.text.lines().count(), 2, "{}", p.filename);
        }
    }

    #[test]
    fn category_label_is_uppercased() {
        assert_eq!(PLACEHOLDERS[0].category_label(), "PHOTO");
        assert_eq!(PLACEHOLDERS[8].category_label(), "VIDEO");
    }

    #[test]
    fn find_placeholder_by_filename() {
        let found = find_placeholder("design2.jpg").unwrap();
        assert_eq!(found.text, "Web\nInterface");
        assert!(find_placeholder("missing.jpg").is_none());
    }
}
