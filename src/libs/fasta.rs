use anyhow::Result;
use indexmap::IndexMap;
use std::io::BufRead;

/// Reads FASTA-like records into an id => sequence map.
///
/// Ids keep the order of their first appearance; a repeated id stays at
/// its original position and takes the later sequence. Every line is
/// trimmed of surrounding whitespace, and fragment lines are joined with
/// no separator, so blank lines and wrapping are both harmless. Lines
/// before the first header belong to no id and are discarded.
///
/// Residues are not validated; a header with no following fragments
/// yields an empty sequence.
pub fn parse<R: BufRead>(reader: R) -> Result<IndexMap<String, String>> {
    let mut seqs: IndexMap<String, String> = IndexMap::new();
    let mut cur_id: Option<String> = None;
    let mut frags: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if let Some(rest) = line.strip_prefix('>') {
            if let Some(id) = cur_id.take() {
                seqs.insert(id, frags.concat());
            }
            frags.clear();
            cur_id = Some(rest.to_string());
        } else {
            frags.push(line.to_string());
        }
    }

    // The last record has no following header to commit it
    if let Some(id) = cur_id {
        seqs.insert(id, frags.concat());
    }

    Ok(seqs)
}

/// Opens `infile` ('stdin', plain text or .gz) and parses it.
pub fn parse_file(infile: &str) -> Result<IndexMap<String, String>> {
    parse(crate::libs::io::reader(infile)?)
}
