use std::io::{self, Write};

const ROW: usize = 16;

/// Writes `data` as rows of offset, hex bytes and printable ASCII:
///
/// ```text
/// 00: 48 65 6c 6c 6f                                  : Hello
/// ```
///
/// The offset column widens with the buffer size.
pub fn print_data<W: Write>(data: &[u8], out: &mut W) -> io::Result<()> {
    let width = match data.len() {
        0..=0x100 => 2,
        0x101..=0x1_0000 => 4,
        0x1_0001..=0x100_0000 => 6,
        _ => 8,
    };
    for (row, line) in data.chunks(ROW).enumerate() {
        write!(out, "{:0width$x}: ", row * ROW)?;
        for i in 0..ROW {
            match line.get(i) {
                Some(b) => write!(out, "{b:02x} ")?,
                None => write!(out, "   ")?,
            }
        }
        write!(out, ": ")?;
        for i in 0..ROW {
            let c = match line.get(i) {
                Some(&b) if (32..127).contains(&b) => b as char,
                Some(_) => '.',
                None => ' ',
            };
            write!(out, "{c}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
