use std::fmt;

use crate::kind::{Element, Func, Kind, Kleisli};


// The five slots a definition may fill. Operations are polymorphic in the
// element types, so each one is a trait over the wrapper kind rather than a
// closure; an operation value is usually a zero-sized marker like `VecOps`.

// point :: a -> m a
pub trait Point<K: Kind> {
    fn point<Ta: Element>(&self, a: Ta) -> K::Of<Ta>;
}

// bind :: m a -> (a -> m b) -> m b
pub trait Bind<K: Kind> {
    fn bind<Ta: Element, Tb: Element>(&self, ma: K::Of<Ta>, k_ab: Kleisli<K, Ta, Tb>) -> K::Of<Tb>;
}

// map :: m a -> (a -> b) -> m b
pub trait Map<K: Kind> {
    fn map<Ta: Element, Tb: Element>(&self, ma: K::Of<Ta>, f_ab: Func<Ta, Tb>) -> K::Of<Tb>;
}

// join :: m (m a) -> m a
pub trait Join<K: Kind> {
    fn join<Ta: Element>(&self, mma: K::Of<K::Of<Ta>>) -> K::Of<Ta>;
}

// ap :: m a -> m (a -> b) -> m b
//
// Note the argument order: the wrapped value comes first, the wrapped
// function second.
pub trait Ap<K: Kind> {
    fn ap<Ta: Element, Tb: Element>(&self, ma: K::Of<Ta>, mf: K::Of<Func<Ta, Tb>>) -> K::Of<Tb>;
}


// Fills a slot the caller left empty. Uninhabited, so an `Option<Absent>` is
// always `None` and none of these bodies can ever run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absent {}

impl<K: Kind> Point<K> for Absent {
    fn point<Ta: Element>(&self, _: Ta) -> K::Of<Ta> {
        match *self {}
    }
}

impl<K: Kind> Bind<K> for Absent {
    fn bind<Ta: Element, Tb: Element>(&self, _: K::Of<Ta>, _: Kleisli<K, Ta, Tb>) -> K::Of<Tb> {
        match *self {}
    }
}

impl<K: Kind> Map<K> for Absent {
    fn map<Ta: Element, Tb: Element>(&self, _: K::Of<Ta>, _: Func<Ta, Tb>) -> K::Of<Tb> {
        match *self {}
    }
}

impl<K: Kind> Join<K> for Absent {
    fn join<Ta: Element>(&self, _: K::Of<K::Of<Ta>>) -> K::Of<Ta> {
        match *self {}
    }
}

impl<K: Kind> Ap<K> for Absent {
    fn ap<Ta: Element, Tb: Element>(&self, _: K::Of<Ta>, _: K::Of<Func<Ta, Tb>>) -> K::Of<Tb> {
        match *self {}
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Point,
    Bind,
    Map,
    Join,
    Ap,
    LiftA2,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Point => "point",
            Op::Bind => "bind",
            Op::Map => "map",
            Op::Join => "join",
            Op::Ap => "ap",
            Op::LiftA2 => "liftA2",
        };
        f.write_str(name)
    }
}
