//! BEM class names (`block__element--modifier`).

pub fn bem(block: &str, element: &str) -> String {
    format!("{block}__{element}")
}

/// Base element class plus its modified variant
pub fn bem_modifier(block: &str, element: &str, modifier: &str) -> String {
    let base = bem(block, element);
    format!("{base} {base}--{modifier}")
}
