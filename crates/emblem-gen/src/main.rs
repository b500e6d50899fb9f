//! Writes the anchor icon set (`icon-72.png` … `icon-512.png`) next to
//! this executable.

fn main() {
    emblem_gen::run(emblem_core::Motif::Anchor);
}
