use std::marker::PhantomData;

use crate::builder::Definition;
use crate::error::Result;
use crate::kind::{Element, Func, Kind, Kleisli};
use crate::monad::Monad;
use crate::ops::{Absent, Bind, Map, Point};

use super::monoid::Monoid;


// A straightforward representation of the writer monad.
// Any joining of an object and a log [monoid] will suffice.
pub type Writer<Ta, Tlog> = (Ta, Tlog);

pub struct WriterKind<Tlog>(PhantomData<Tlog>);

impl<Tlog: Monoid + Element> Kind for WriterKind<Tlog> {
    type Of<Ta: Element> = Writer<Ta, Tlog>;
}


// Given by point, map and bind; join and ap are derived.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriterOps;

impl<Tlog: Monoid + Element> Point<WriterKind<Tlog>> for WriterOps {
    fn point<Ta: Element>(&self, a: Ta) -> Writer<Ta, Tlog> {
        (a, Tlog::mempty())
    }
}

// functor
impl<Tlog: Monoid + Element> Map<WriterKind<Tlog>> for WriterOps {
    fn map<Ta: Element, Tb: Element>(&self, ma: Writer<Ta, Tlog>, f_ab: Func<Ta, Tb>) -> Writer<Tb, Tlog> {
        (f_ab(ma.0), ma.1)
    }
}

// monad
impl<Tlog: Monoid + Element> Bind<WriterKind<Tlog>> for WriterOps {
    fn bind<Ta: Element, Tb: Element>(
        &self,
        ma: Writer<Ta, Tlog>,
        k_ab: Kleisli<WriterKind<Tlog>, Ta, Tb>
    ) -> Writer<Tb, Tlog> {
        let b_log_ab: Writer<Tb, Tlog> = k_ab.run(ma.0);
        (b_log_ab.0, ma.1.mappend(&b_log_ab.1))
    }
}


// pushes a message into the log.
pub fn log<Tlog: Monoid>(msg: Tlog) -> Writer<(), Tlog> {
    ((), msg)
}


pub type WriterMonad<Tlog> = Monad<WriterKind<Tlog>, WriterOps, WriterOps, WriterOps, Absent, Absent>;

pub fn writer_monad<Tlog: Monoid + Element>() -> Result<WriterMonad<Tlog>> {
    Definition::<WriterKind<Tlog>>::new()
        .with_point(WriterOps)
        .with_map(WriterOps)
        .with_bind(WriterOps)
        .build()
}
