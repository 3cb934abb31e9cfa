//! Унифицированные трэйты чтения/записи на основе std::io::{BufRead, Write}.

use crate::{error::Result, model::TransferRequest};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(&self, r: R) -> Result<TransferRequest>;
}

pub trait WriteFormat {
    fn write<W: Write>(&self, w: W, req: &TransferRequest) -> Result<()>;
}
