use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Little-endian data bus seen by the IL evaluator.
pub trait Bus {
    fn read_u8(&mut self, addr: u32) -> Result<u8>;
    fn write_u8(&mut self, addr: u32, val: u8) -> Result<()>;

    fn read_u16(&mut self, addr: u32) -> Result<u16> {
        Ok(self.read(addr, 2)? as u16)
    }
    fn read_u32(&mut self, addr: u32) -> Result<u32> {
        Ok(self.read(addr, 4)? as u32)
    }
    fn write_u16(&mut self, addr: u32, val: u16) -> Result<()> {
        self.write(addr, 2, val as u64)
    }
    fn write_u32(&mut self, addr: u32, val: u32) -> Result<()> {
        self.write(addr, 4, val as u64)
    }

    /// `size` bytes (1..=8) starting at `addr`, assembled little-endian.
    fn read(&mut self, addr: u32, size: u8) -> Result<u64> {
        let mut value = 0u64;
        for i in 0..size as u32 {
            value |= (self.read_u8(addr.wrapping_add(i))? as u64) << (8 * i);
        }
        Ok(value)
    }

    fn write(&mut self, addr: u32, size: u8, val: u64) -> Result<()> {
        for i in 0..size as u32 {
            self.write_u8(addr.wrapping_add(i), (val >> (8 * i)) as u8)?;
        }
        Ok(())
    }
}

/// Flat RAM window of `mem.len()` bytes starting at `base`.
#[derive(Clone, Serialize, Deserialize)]
pub struct LinearMemory {
    pub mem: Vec<u8>,
    pub base: u32,
}

impl LinearMemory {
    pub fn new(size: usize) -> Self {
        Self::at(0, size)
    }

    pub fn at(base: u32, size: usize) -> Self {
        Self {
            mem: vec![0; size],
            base,
        }
    }

    /// Copy `bytes` in at `addr`.
    pub fn load(&mut self, addr: u32, bytes: &[u8]) -> Result<()> {
        let off = self.offset(addr, bytes.len())?;
        self.mem[off..off + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    fn offset(&self, addr: u32, len: usize) -> Result<usize> {
        let off = addr.wrapping_sub(self.base) as usize;
        if addr < self.base || off + len > self.mem.len() {
            bail!("{addr:#010x} (+{len}) is outside the mapped window");
        }
        Ok(off)
    }
}

impl Bus for LinearMemory {
    fn read_u8(&mut self, addr: u32) -> Result<u8> {
        let off = self.offset(addr, 1)?;
        Ok(self.mem[off])
    }
    fn write_u8(&mut self, addr: u32, val: u8) -> Result<()> {
        let off = self.offset(addr, 1)?;
        self.mem[off] = val;
        Ok(())
    }
    fn read(&mut self, addr: u32, size: u8) -> Result<u64> {
        let off = self.offset(addr, size as usize)?;
        let mut bytes = [0u8; 8];
        bytes[..size as usize].copy_from_slice(&self.mem[off..off + size as usize]);
        Ok(u64::from_le_bytes(bytes))
    }
    fn write(&mut self, addr: u32, size: u8, val: u64) -> Result<()> {
        let off = self.offset(addr, size as usize)?;
        self.mem[off..off + size as usize].copy_from_slice(&val.to_le_bytes()[..size as usize]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian_words() {
        let mut mem = LinearMemory::at(0x1000, 16);
        mem.write_u32(0x1004, 0x1122_3344).unwrap();
        assert_eq!(mem.mem[4..8], [0x44, 0x33, 0x22, 0x11]);
        assert_eq!(mem.read_u16(0x1006).unwrap(), 0x1122);
        assert_eq!(mem.read(0x1004, 8).unwrap(), 0x1122_3344);
    }

    #[test]
    fn accesses_outside_the_window_fail() {
        let mut mem = LinearMemory::at(0x1000, 16);
        assert!(mem.read_u8(0x0FFF).is_err());
        assert!(mem.read_u32(0x100E).is_err());
        assert!(mem.load(0x1008, &[0; 8]).is_ok());
    }
}
