// SPDX-License-Identifier: Apache-2.0

use core::cell::RefCell;
use core::ops::{Deref, DerefMut};

use alloc::vec::Vec;

use log::trace;

use crate::formatter::Formatter;

/// A free-list of reusable [`Formatter`] instances.
///
/// Formatters keep their output capacity across uses, so a pool lets hot
/// paths format without reallocating. The pool is single-threaded; the
/// `RefCell` enforces that at runtime. Acquiring from an empty pool is a
/// contract violation and panics, so callers size the pool up front with
/// [`fill`](Self::fill).
#[derive(Debug)]
pub struct FormatterPool {
    free: RefCell<Vec<Formatter>>,
}

impl FormatterPool {
    /// Creates a pool seeded with one formatter.
    pub fn new() -> Self {
        let mut free = Vec::new();
        free.push(Formatter::new());
        FormatterPool {
            free: RefCell::new(free),
        }
    }

    /// Adds `n` fresh formatters.
    pub fn fill(&self, n: usize) {
        let mut free = self.free.borrow_mut();
        for _ in 0..n {
            free.push(Formatter::new());
        }
    }

    /// Number of formatters currently available.
    pub fn available(&self) -> usize {
        self.free.borrow().len()
    }

    /// Takes a formatter, returned to the pool when the guard drops.
    ///
    /// # Panics
    ///
    /// Panics if the pool is empty.
    pub fn acquire(&self) -> PooledFormatter<'_> {
        let formatter = self
            .free
            .borrow_mut()
            .pop()
            .expect("formatter pool exhausted");
        trace!("formatter acquired, {} left", self.available());
        PooledFormatter {
            pool: self,
            formatter: Some(formatter),
        }
    }

    fn release(&self, mut formatter: Formatter) {
        formatter.clear();
        self.free.borrow_mut().push(formatter);
    }
}

impl Default for FormatterPool {
    fn default() -> Self {
        FormatterPool::new()
    }
}

/// Scoped handle to a pooled [`Formatter`].
///
/// Derefs to the formatter; on drop the instance is cleared and pushed
/// back, on every exit path including unwinding.
#[derive(Debug)]
pub struct PooledFormatter<'a> {
    pool: &'a FormatterPool,
    formatter: Option<Formatter>,
}

impl Deref for PooledFormatter<'_> {
    type Target = Formatter;

    fn deref(&self) -> &Formatter {
        // Only `drop` takes the formatter out.
        self.formatter.as_ref().unwrap()
    }
}

impl DerefMut for PooledFormatter<'_> {
    fn deref_mut(&mut self) -> &mut Formatter {
        self.formatter.as_mut().unwrap()
    }
}

impl Drop for PooledFormatter<'_> {
    fn drop(&mut self) {
        if let Some(formatter) = self.formatter.take() {
            self.pool.release(formatter);
            trace!("formatter released, {} left", self.pool.available());
        }
    }
}
