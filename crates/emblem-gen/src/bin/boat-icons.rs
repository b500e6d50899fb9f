//! Writes the boat icon set next to this executable.

fn main() {
    emblem_gen::run(emblem_core::Motif::Boat);
}
