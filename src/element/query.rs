/// Read-only access to a node of a hierarchical document.
///
/// Recognizers only ever look at element names, child elements and text, so
/// any tree that can answer these three questions can be classified.
pub trait SerializedElement {
    /// The tag name of this element.
    fn name(&self) -> &str;

    /// The text content of this element (not including descendants).
    fn text(&self) -> &str;

    /// The first direct child with the given tag name.
    fn child(&self, name: &str) -> Option<&Self>;

    /// Selects a single descendant by a relative, `/`-separated path of child names.
    ///
    /// Empty and `.` segments are skipped, so `"a//b"`, `"./a/b"` and `"a/b"`
    /// all select the same node. An empty path selects `self`.
    fn select_single_node(&self, path: &str) -> Option<&Self> {
        path.split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Compares the text content of this element to a literal, byte for byte.
    fn text_equals(&self, literal: &str) -> bool {
        self.text() == literal
    }
}
