use std::marker::PhantomData;
use std::rc::Rc;

use crate::builder::Definition;
use crate::error::Result;
use crate::kind::{Element, Func, Kind, Kleisli};
use crate::monad::Monad;
use crate::ops::{Absent, Ap, Bind, Point};


// A computation reading from a shared, read-only configuration.
pub struct Reader<Tcfg, Ta> {
    pub run_reader: Rc<dyn Fn(Tcfg) -> Ta>
}

impl<Tcfg, Ta> Reader<Tcfg, Ta> {
    pub fn new(run_reader: impl Fn(Tcfg) -> Ta + 'static) -> Self {
        Reader { run_reader: Rc::new(run_reader) }
    }

    pub fn run(&self, cfg: Tcfg) -> Ta {
        (self.run_reader)(cfg)
    }
}

impl<Tcfg, Ta> Clone for Reader<Tcfg, Ta> {
    fn clone(&self) -> Self {
        Reader { run_reader: self.run_reader.clone() }
    }
}

pub struct ReaderKind<Tcfg>(PhantomData<Tcfg>);

impl<Tcfg: Element> Kind for ReaderKind<Tcfg> {
    type Of<Ta: Element> = Reader<Tcfg, Ta>;
}


// Given by point, bind and a direct ap; map and join are derived, and
// liftA2 runs through the supplied ap.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReaderOps;

impl<Tcfg: Element> Point<ReaderKind<Tcfg>> for ReaderOps {
    fn point<Ta: Element>(&self, a: Ta) -> Reader<Tcfg, Ta> {
        Reader::new(move |_| a.clone())
    }
}

// applicative
// the environment is handed to both sides.
impl<Tcfg: Element> Ap<ReaderKind<Tcfg>> for ReaderOps {
    fn ap<Ta: Element, Tb: Element>(&self, ma: Reader<Tcfg, Ta>, mf: Reader<Tcfg, Func<Ta, Tb>>) -> Reader<Tcfg, Tb> {
        Reader::new(move |cfg: Tcfg| (mf.run(cfg.clone()))(ma.run(cfg)))
    }
}

// monad
impl<Tcfg: Element> Bind<ReaderKind<Tcfg>> for ReaderOps {
    fn bind<Ta: Element, Tb: Element>(
        &self,
        ma: Reader<Tcfg, Ta>,
        k_ab: Kleisli<ReaderKind<Tcfg>, Ta, Tb>
    ) -> Reader<Tcfg, Tb> {
        Reader::new(move |cfg: Tcfg| k_ab.run(ma.run(cfg.clone())).run(cfg))
    }
}


// reads the whole environment.
pub fn load<Tcfg>() -> Reader<Tcfg, Tcfg> {
    Reader::new(|cfg: Tcfg| cfg)
}


pub type ReaderMonad<Tcfg> = Monad<ReaderKind<Tcfg>, ReaderOps, ReaderOps, Absent, Absent, ReaderOps>;

pub fn reader_monad<Tcfg: Element>() -> Result<ReaderMonad<Tcfg>> {
    Definition::<ReaderKind<Tcfg>>::new()
        .with_point(ReaderOps)
        .with_bind(ReaderOps)
        .with_ap(ReaderOps)
        .build()
}
