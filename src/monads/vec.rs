use crate::builder::Definition;
use crate::error::Result;
use crate::kind::{Element, Func, Kind};
use crate::monad::Monad;
use crate::ops::{Absent, Join, Map, Point};


pub struct VecKind;

impl Kind for VecKind {
    type Of<Ta: Element> = Vec<Ta>;
}


// Lists are given by point, map and join; bind and ap are derived.
#[derive(Debug, Clone, Copy, Default)]
pub struct VecOps;

impl Point<VecKind> for VecOps {
    fn point<Ta: Element>(&self, a: Ta) -> Vec<Ta> {
        vec![a]
    }
}

impl Map<VecKind> for VecOps {
    fn map<Ta: Element, Tb: Element>(&self, ma: Vec<Ta>, f_ab: Func<Ta, Tb>) -> Vec<Tb> {
        ma.into_iter().map(|a| f_ab(a)).collect()
    }
}

impl Join<VecKind> for VecOps {
    fn join<Ta: Element>(&self, mma: Vec<Vec<Ta>>) -> Vec<Ta> {
        let mut ret: Vec<Ta> = vec![];
        for ma in mma {
            ret.extend(ma);
        }
        ret
    }
}


pub type VecMonad = Monad<VecKind, VecOps, Absent, VecOps, VecOps, Absent>;

pub fn vec_monad() -> Result<VecMonad> {
    Definition::<VecKind>::new()
        .with_point(VecOps)
        .with_map(VecOps)
        .with_join(VecOps)
        .build()
}
