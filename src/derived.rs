use std::rc::Rc;

use crate::kind::{Element, Func, Kind, Kleisli};
use crate::ops::{Ap, Bind, Join, Map, Point};


// A resolved slot: either what the caller supplied, or a derivation.
#[derive(Clone)]
pub enum Resolved<G, D> {
    Given(G),
    Derived(D),
}

impl<G, D> Resolved<G, D> {
    pub fn is_derived(&self) -> bool {
        matches!(self, Resolved::Derived(_))
    }
}

impl<K: Kind, G: Bind<K>, D: Bind<K>> Bind<K> for Resolved<G, D> {
    fn bind<Ta: Element, Tb: Element>(&self, ma: K::Of<Ta>, k_ab: Kleisli<K, Ta, Tb>) -> K::Of<Tb> {
        match self {
            Resolved::Given(given) => given.bind::<Ta, Tb>(ma, k_ab),
            Resolved::Derived(derived) => derived.bind::<Ta, Tb>(ma, k_ab),
        }
    }
}

impl<K: Kind, G: Map<K>, D: Map<K>> Map<K> for Resolved<G, D> {
    fn map<Ta: Element, Tb: Element>(&self, ma: K::Of<Ta>, f_ab: Func<Ta, Tb>) -> K::Of<Tb> {
        match self {
            Resolved::Given(given) => given.map::<Ta, Tb>(ma, f_ab),
            Resolved::Derived(derived) => derived.map::<Ta, Tb>(ma, f_ab),
        }
    }
}

impl<K: Kind, G: Join<K>, D: Join<K>> Join<K> for Resolved<G, D> {
    fn join<Ta: Element>(&self, mma: K::Of<K::Of<Ta>>) -> K::Of<Ta> {
        match self {
            Resolved::Given(given) => given.join::<Ta>(mma),
            Resolved::Derived(derived) => derived.join::<Ta>(mma),
        }
    }
}

impl<K: Kind, G: Ap<K>, D: Ap<K>> Ap<K> for Resolved<G, D> {
    fn ap<Ta: Element, Tb: Element>(&self, ma: K::Of<Ta>, mf: K::Of<Func<Ta, Tb>>) -> K::Of<Tb> {
        match self {
            Resolved::Given(given) => given.ap::<Ta, Tb>(ma, mf),
            Resolved::Derived(derived) => derived.ap::<Ta, Tb>(ma, mf),
        }
    }
}


// bind ma f = join (map ma f)
#[derive(Clone)]
pub struct BindFromMapJoin<M, J> {
    map: M,
    join: J,
}

impl<M, J> BindFromMapJoin<M, J> {
    pub fn new(map: M, join: J) -> Self {
        BindFromMapJoin { map, join }
    }
}

impl<K: Kind, M: Map<K>, J: Join<K>> Bind<K> for BindFromMapJoin<M, J> {
    fn bind<Ta: Element, Tb: Element>(&self, ma: K::Of<Ta>, k_ab: Kleisli<K, Ta, Tb>) -> K::Of<Tb> {
        let mmb: K::Of<K::Of<Tb>> = self.map.map::<Ta, K::Of<Tb>>(ma, k_ab.kleisli);
        self.join.join::<Tb>(mmb)
    }
}


// map ma f = bind ma (\a -> point (f a))
#[derive(Clone)]
pub struct MapFromBind<P, B> {
    point: P,
    bind: B,
}

impl<P, B> MapFromBind<P, B> {
    pub fn new(point: P, bind: B) -> Self {
        MapFromBind { point, bind }
    }
}

impl<K, P, B> Map<K> for MapFromBind<P, B>
where
    K: Kind,
    P: Point<K> + Clone + 'static,
    B: Bind<K>,
{
    fn map<Ta: Element, Tb: Element>(&self, ma: K::Of<Ta>, f_ab: Func<Ta, Tb>) -> K::Of<Tb> {
        let point = self.point.clone();
        self.bind.bind::<Ta, Tb>(ma, Kleisli::new(move |a: Ta| point.point::<Tb>(f_ab(a))))
    }
}


// join mma = bind mma id
#[derive(Clone)]
pub struct JoinFromBind<B> {
    bind: B,
}

impl<B> JoinFromBind<B> {
    pub fn new(bind: B) -> Self {
        JoinFromBind { bind }
    }
}

impl<K: Kind, B: Bind<K>> Join<K> for JoinFromBind<B> {
    fn join<Ta: Element>(&self, mma: K::Of<K::Of<Ta>>) -> K::Of<Ta> {
        self.bind.bind::<K::Of<Ta>, Ta>(mma, Kleisli::new(|ma: K::Of<Ta>| ma))
    }
}


// ap ma mf = bind ma (\a -> map mf (\f -> f a))
// the wrapped argument is bound first, so for lists every argument is paired
// with every function, arguments varying slowest.
#[derive(Clone)]
pub struct ApFromBind<B, M> {
    bind: B,
    map: M,
}

impl<B, M> ApFromBind<B, M> {
    pub fn new(bind: B, map: M) -> Self {
        ApFromBind { bind, map }
    }
}

impl<K, B, M> Ap<K> for ApFromBind<B, M>
where
    K: Kind,
    B: Bind<K>,
    M: Map<K> + Clone + 'static,
{
    fn ap<Ta: Element, Tb: Element>(&self, ma: K::Of<Ta>, mf: K::Of<Func<Ta, Tb>>) -> K::Of<Tb> {
        let map = self.map.clone();
        self.bind.bind::<Ta, Tb>(ma, Kleisli::new(move |a: Ta| {
            map.map::<Func<Ta, Tb>, Tb>(mf.clone(), Rc::new(move |f_ab: Func<Ta, Tb>| f_ab(a.clone())))
        }))
    }
}


// tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::func;
    use crate::monads::option::{OptionKind, OptionOps};
    use crate::monads::vec::{VecKind, VecOps};

    #[test]
    fn test_bind_from_map_join() {
        let bind = BindFromMapJoin::new(VecOps, VecOps);
        let mb = Bind::<VecKind>::bind(&bind, vec![1, 2], Kleisli::new(|x: i64| vec![x, -x]));
        assert_eq!(mb, vec![1, -1, 2, -2]);
    }

    #[test]
    fn test_map_from_bind() {
        let map = MapFromBind::new(OptionOps, OptionOps);
        let mb = Map::<OptionKind>::map(&map, Some(20), func(|x: i64| x / 4));
        assert_eq!(mb, Some(5));
        let none = Map::<OptionKind>::map(&map, None, func(|x: i64| x / 4));
        assert_eq!(none, None);
    }

    #[test]
    fn test_join_from_bind() {
        let join = JoinFromBind::new(OptionOps);
        assert_eq!(Join::<OptionKind>::join(&join, Some(Some("in"))), Some("in"));
        assert_eq!(Join::<OptionKind>::join::<&str>(&join, Some(None)), None);
        assert_eq!(Join::<OptionKind>::join::<&str>(&join, None), None);
    }

    #[test]
    fn test_ap_from_bind() {
        let ap = ApFromBind::new(BindFromMapJoin::new(VecOps, VecOps), VecOps);
        let fs: Vec<Func<i64, i64>> = vec![func(|x: i64| x + 1), func(|x: i64| x * 10)];
        let mb = Ap::<VecKind>::ap(&ap, vec![1, 2], fs);
        assert_eq!(mb, vec![2, 10, 3, 20]);
    }

    #[test]
    fn test_resolved_dispatch() {
        let given: Resolved<VecOps, JoinFromBind<BindFromMapJoin<VecOps, VecOps>>> = Resolved::Given(VecOps);
        let derived: Resolved<VecOps, JoinFromBind<BindFromMapJoin<VecOps, VecOps>>> =
            Resolved::Derived(JoinFromBind::new(BindFromMapJoin::new(VecOps, VecOps)));
        assert!(!given.is_derived());
        assert!(derived.is_derived());
        let mma = vec![vec!['a'], vec![], vec!['b', 'c']];
        assert_eq!(Join::<VecKind>::join(&given, mma.clone()), vec!['a', 'b', 'c']);
        assert_eq!(Join::<VecKind>::join(&derived, mma), vec!['a', 'b', 'c']);
    }
}
