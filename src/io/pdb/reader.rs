use crate::io::error::Error;
use crate::model::{chain::Chain, residue::Residue};
use std::io::BufRead;
use std::ops::Range;
use tracing::debug;

const FORMAT: &str = "PDB";
const RESOLUTION_PREFIX: &str = "REMARK   2 RESOLUTION.";

#[derive(Debug, Clone, PartialEq)]
struct ResKey {
    name: String,
    res_seq: i32,
    i_code: Option<char>,
}

/// Reads the chains of the first model in a PDB stream.
///
/// Only `ATOM` records contribute residues; consecutive records sharing residue name, sequence
/// number, and insertion code collapse into one residue, keeping file order. Every chain is
/// tagged with `source_name` and the resolution from `REMARK   2`, and starts out valid.
pub fn read<R: BufRead>(reader: R, source_name: &str) -> Result<Vec<Chain>, Error> {
    let mut chains: Vec<Chain> = Vec::new();
    let mut last_keys: Vec<Option<ResKey>> = Vec::new();
    let mut resolution = 0.0;

    let mut line_num = 0;

    for line in reader.lines() {
        line_num += 1;
        let line = line.map_err(|e| Error::from_io(e, None))?;

        if line.starts_with(RESOLUTION_PREFIX) {
            resolution = parse_resolution(&line);
            continue;
        }

        if line.starts_with("ENDMDL") {
            debug!(line = line_num, "stopping at end of first model");
            break;
        }

        if !line.starts_with("ATOM  ") {
            continue;
        }

        let (chain_id, key) = parse_atom_record(&line, line_num)?;

        let chain_idx = match chains.iter().position(|c| c.id == chain_id) {
            Some(idx) => idx,
            None => {
                chains.push(Chain::new(source_name, chain_id));
                last_keys.push(None);
                chains.len() - 1
            }
        };

        if last_keys[chain_idx].as_ref() != Some(&key) {
            chains[chain_idx].add_residue(Residue::new(key.res_seq, key.i_code, &key.name));
            last_keys[chain_idx] = Some(key);
        }
    }

    for chain in &mut chains {
        chain.resolution = resolution;
    }

    debug!(
        source = source_name,
        chains = chains.len(),
        lines = line_num,
        "read PDB chains"
    );

    Ok(chains)
}

fn parse_atom_record(line: &str, line_num: usize) -> Result<(char, ResKey), Error> {
    if line.len() < 26 {
        return Err(Error::parse(FORMAT, None, line_num, "ATOM record too short"));
    }

    let name = field(line, 17..20, line_num)?.trim().to_string();
    let chain_id = line.chars().nth(21).unwrap_or(' ');
    let res_seq = field(line, 22..26, line_num)?
        .trim()
        .parse::<i32>()
        .map_err(|_| Error::parse(FORMAT, None, line_num, "Invalid residue sequence number"))?;
    let i_code = match line.chars().nth(26) {
        Some(' ') | None => None,
        Some(c) => Some(c),
    };

    Ok((
        chain_id,
        ResKey {
            name,
            res_seq,
            i_code,
        },
    ))
}

fn field(line: &str, range: Range<usize>, line_num: usize) -> Result<&str, Error> {
    line.get(range)
        .ok_or_else(|| Error::parse(FORMAT, None, line_num, "Record is not column-aligned ASCII"))
}

fn parse_resolution(line: &str) -> f64 {
    line[RESOLUTION_PREFIX.len()..]
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .unwrap_or(0.0)
}
