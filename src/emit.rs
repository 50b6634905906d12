use std::io::{self, Write};

const VALUES_PER_LINE: usize = 12;

/// Renders a table prefix as a Rust source fragment.
///
/// The fragment is a `pub static` array literal; `include!` it (or paste it
/// into a module) and pass the static straight to [`crate::lookup_larger`] /
/// [`crate::lookup_smaller`]. The entries must be the prefix of a table built
/// by [`crate::SmoothTable`] so the literal stays an exact prefix of the
/// canonical sequence.
pub fn rust_source_fragment(name: &str, entries: &[u64]) -> String {
    let mut out = Vec::new();
    // writing to a Vec<u8> cannot fail
    write_rust_source(&mut out, name, entries).unwrap();
    String::from_utf8(out).unwrap()
}

pub fn write_rust_source<W: Write>(w: &mut W, name: &str, entries: &[u64]) -> io::Result<()> {
    writeln!(w, "// {} smooth sizes, ascending.", entries.len())?;
    writeln!(w, "pub static {}: [u64; {}] = [", name, entries.len())?;
    for chunk in entries.chunks(VALUES_PER_LINE) {
        let line = chunk
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(w, "    {line},")?;
    }
    writeln!(w, "];")
}
