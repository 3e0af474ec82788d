use crate::io::codes::ResidueTranslator;
use crate::io::error::Error;
use crate::model::chain::Chain;
use std::io::Write;
use tracing::debug;

/// Residue codes emitted per body line.
pub const LINE_WIDTH: usize = 60;

/// Writes one sequence record per valid chain and returns how many records were written.
///
/// Invalid chains are skipped without emitting anything. Each record is a header line of
/// the form `>{file} {id}  {nres} {resolution:7.3}` followed by the translated residue codes,
/// broken after every [`LINE_WIDTH`] codes and terminated by a single newline.
pub fn write_chains<W, T>(writer: W, chains: &[Chain], translator: &T) -> Result<usize, Error>
where
    W: Write,
    T: ResidueTranslator + ?Sized,
{
    let mut ctx = WriterContext::new(writer);

    for chain in chains {
        if !chain.valid {
            debug!(file = %chain.file, chain = %chain.id, "skipping invalid chain");
            continue;
        }

        ctx.write_header(chain)?;

        ctx.write_body(chain, translator)?;
    }

    Ok(ctx.records)
}

struct WriterContext<W> {
    writer: W,
    records: usize,
}

impl<W: Write> WriterContext<W> {
    fn new(writer: W) -> Self {
        Self { writer, records: 0 }
    }

    fn write_header(&mut self, chain: &Chain) -> Result<(), Error> {
        writeln!(
            self.writer,
            ">{} {}  {} {:7.3}",
            chain.file,
            chain.header_id(),
            chain.residue_count(),
            chain.resolution
        )
        .map_err(|e| Error::from_io(e, None))?;
        self.records += 1;
        Ok(())
    }

    fn write_body<T>(&mut self, chain: &Chain, translator: &T) -> Result<(), Error>
    where
        T: ResidueTranslator + ?Sized,
    {
        let mut code_buf = [0u8; 4];

        for (idx, residue) in chain.iter_residues().enumerate() {
            if idx != 0 && idx % LINE_WIDTH == 0 {
                writeln!(self.writer).map_err(|e| Error::from_io(e, None))?;
            }
            let code = translator.one_letter(&residue.name);
            self.writer
                .write_all(code.encode_utf8(&mut code_buf).as_bytes())
                .map_err(|e| Error::from_io(e, None))?;
        }

        writeln!(self.writer).map_err(|e| Error::from_io(e, None))
    }
}
