use std::marker::PhantomData;

use crate::derived::{ApFromBind, BindFromMapJoin, JoinFromBind, MapFromBind, Resolved};
use crate::kind::{Element, Func, Kind, Kleisli};
use crate::ops::{Ap, Bind, Join, Map, Op, Point};


pub type BindSlot<B, M, J> = Resolved<B, BindFromMapJoin<M, J>>;
pub type MapSlot<P, B, M> = Resolved<M, MapFromBind<P, B>>;
pub type JoinSlot<B, J> = Resolved<J, JoinFromBind<B>>;
pub type ApSlot<P, B, M, J, A> = Resolved<A, ApFromBind<BindSlot<B, M, J>, MapSlot<P, B, M>>>;


/// A complete set of monad operations, produced by `Definition::build`.
///
/// Nothing in it changes after construction, so it can be cloned and shared
/// freely.
pub struct Monad<K, P, B, M, J, A> {
    point: P,
    bind: BindSlot<B, M, J>,
    map: MapSlot<P, B, M>,
    join: JoinSlot<B, J>,
    ap: ApSlot<P, B, M, J, A>,
    _kind: PhantomData<K>,
}

impl<K, P, B, M, J, A> Monad<K, P, B, M, J, A> {
    pub(crate) fn from_slots(
        point: P,
        bind: BindSlot<B, M, J>,
        map: MapSlot<P, B, M>,
        join: JoinSlot<B, J>,
        ap: ApSlot<P, B, M, J, A>,
    ) -> Self {
        Monad { point, bind, map, join, ap, _kind: PhantomData }
    }

    // operations synthesized by the builder rather than supplied
    pub fn derived(&self) -> Vec<Op> {
        let mut ops = Vec::new();
        if self.bind.is_derived() { ops.push(Op::Bind); }
        if self.map.is_derived() { ops.push(Op::Map); }
        if self.join.is_derived() { ops.push(Op::Join); }
        if self.ap.is_derived() { ops.push(Op::Ap); }
        ops.push(Op::LiftA2);
        ops
    }
}

impl<K, P: Clone, B: Clone, M: Clone, J: Clone, A: Clone> Clone for Monad<K, P, B, M, J, A> {
    fn clone(&self) -> Self {
        Monad {
            point: self.point.clone(),
            bind: self.bind.clone(),
            map: self.map.clone(),
            join: self.join.clone(),
            ap: self.ap.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K, P, B, M, J, A> Monad<K, P, B, M, J, A>
where
    K: Kind,
    P: Point<K> + Clone + 'static,
    B: Bind<K> + Clone + 'static,
    M: Map<K> + Clone + 'static,
    J: Join<K>,
    A: Ap<K>,
{
    // a -> m a
    pub fn point<Ta: Element>(&self, a: Ta) -> K::Of<Ta> {
        self.point.point::<Ta>(a)
    }

    // m a -> (a -> m b) -> m b
    pub fn bind<Ta: Element, Tb: Element>(&self, ma: K::Of<Ta>, k_ab: Kleisli<K, Ta, Tb>) -> K::Of<Tb> {
        self.bind.bind::<Ta, Tb>(ma, k_ab)
    }

    // functor
    // m a -> (a -> b) -> m b
    pub fn map<Ta: Element, Tb: Element>(&self, ma: K::Of<Ta>, f_ab: Func<Ta, Tb>) -> K::Of<Tb> {
        self.map.map::<Ta, Tb>(ma, f_ab)
    }

    // m (m a) -> m a
    pub fn join<Ta: Element>(&self, mma: K::Of<K::Of<Ta>>) -> K::Of<Ta> {
        self.join.join::<Ta>(mma)
    }

    // applicative
    // m a -> m (a -> b) -> m b
    pub fn ap<Ta: Element, Tb: Element>(&self, ma: K::Of<Ta>, mf: K::Of<Func<Ta, Tb>>) -> K::Of<Tb> {
        self.ap.ap::<Ta, Tb>(ma, mf)
    }

    // liftA2 :: m a -> m b -> (a -> b -> c) -> m c
    //
    // Always `ap(mb, map(ma, f))`, so a supplied `ap` is what runs here.
    // `f` is curried: mapping it over `ma` leaves partially applied
    // functions inside the wrapper.
    pub fn lift_a2<Ta: Element, Tb: Element, Tc: Element>(
        &self,
        ma: K::Of<Ta>,
        mb: K::Of<Tb>,
        f_abc: Func<Ta, Func<Tb, Tc>>
    ) -> K::Of<Tc> {
        let mf: K::Of<Func<Tb, Tc>> = self.map::<Ta, Func<Tb, Tc>>(ma, f_abc);
        self.ap::<Tb, Tc>(mb, mf)
    }
}

impl<K, P, B, M, J, A> Monad<K, P, B, M, J, A>
where
    K: Kind,
    P: Point<K> + Clone + 'static,
    B: Bind<K> + Clone + 'static,
    M: Map<K> + Clone + 'static,
    J: Join<K> + Clone + 'static,
    A: Ap<K> + Clone + 'static,
{
    // kleisli composition, (a -> m b) -> (b -> m c) -> (a -> m c)
    pub fn compose<Ta: 'static, Tb: Element, Tc: Element>(
        &self,
        k_ab: Kleisli<K, Ta, Tb>,
        k_bc: Kleisli<K, Tb, Tc>
    ) -> Kleisli<K, Ta, Tc> {
        let this = self.clone();
        Kleisli::new(move |a: Ta| this.bind::<Tb, Tc>(k_ab.run(a), k_bc.clone()))
    }
}


#[macro_export]
macro_rules! monad_binds {
    ($m:ident; $ma:block) => { $ma };
    ($m:ident; $ma:block >>= $k:block $(>>= $rest:block)*) => {
        $crate::monad_binds!($m; { $m.bind($ma, $k) } $(>>= $rest)*)
    };
}


// do-notation over any built monad bound to an identifier:
//   monad_do!(m; x <- ma, (cfg: Config) <- load(), y = x + 1, effect, m.point(y))
// the element type of `ma` can't be read back through `K::Of<_>`, so a binding
// whose fields or methods are used needs the `(v: T) <- ma` form.
// continuations get their own clone of the monad under the same name.
#[macro_export]
macro_rules! monad_do {
    ($m:ident; $v:ident = $e:expr, $($rest:tt)*) => {{
        let $v = $e;
        $crate::monad_do!($m; $($rest)*)
    }};

    ($m:ident; ($v:ident : $t:ty) <- $e:expr, $($rest:tt)*) => {{
        let outer = $m.clone();
        $m.bind(
            $e,
            $crate::Kleisli::new(move |$v: $t| {
                let $m = outer.clone();
                $crate::monad_do!($m; $($rest)*)
            })
        )
    }};

    ($m:ident; $v:ident <- $e:expr, $($rest:tt)*) => {{
        let outer = $m.clone();
        $m.bind(
            $e,
            $crate::Kleisli::new(move |$v| {
                let $m = outer.clone();
                $crate::monad_do!($m; $($rest)*)
            })
        )
    }};

    ($m:ident; $e:expr, $($rest:tt)*) => {{
        let outer = $m.clone();
        $m.bind(
            $e,
            $crate::Kleisli::new(move |_| {
                let $m = outer.clone();
                $crate::monad_do!($m; $($rest)*)
            })
        )
    }};

    ($m:ident; $e:expr) => { $e };
}


// tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::func;
    use crate::monads::vec::{vec_monad, VecKind};

    #[test]
    fn test_fmap() {
        let m = vec_monad().unwrap();
        assert_eq!(
            m.map(vec!['a', 'b', 'c'], func(|c: char| format!("{}...", c))),
            vec!["a...".to_string(), "b...".to_string(), "c...".to_string()]
        );
    }

    #[test]
    fn test_join() {
        let m = vec_monad().unwrap();
        assert_eq!(
            m.join(vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e']]),
            vec!['a', 'b', 'c', 'd', 'e']
        );
    }

    #[test]
    fn test_bind() {
        let m = vec_monad().unwrap();
        assert_eq!(
            m.bind(vec![3, 7], Kleisli::new(|x: i64| vec![x.to_string(), (x + 3).to_string()])),
            vec!["3", "6", "7", "10"]
        );
    }

    #[test]
    fn test_apply() {
        let m = vec_monad().unwrap();
        let fs: Vec<Func<i64, i64>> = vec![func(|x: i64| x + 100), func(|x: i64| -x)];
        assert_eq!(m.ap(vec![1, 2], fs), vec![101, -1, 102, -2]);
    }

    #[test]
    fn test_lift_a2() {
        let m = vec_monad().unwrap();
        let pair = func(|x: i64| func(move |y: i64| vec![x, y]));
        assert_eq!(
            m.lift_a2(vec![3, 7], vec![1, 2], pair),
            vec![vec![3, 1], vec![7, 1], vec![3, 2], vec![7, 2]]
        );
    }

    #[test]
    fn test_point() {
        let m = vec_monad().unwrap();
        assert_eq!(m.point("x"), vec!["x"]);
        assert_eq!(m.join(m.point(vec![1, 2])), vec![1, 2]);
    }

    #[test]
    fn test_compose() {
        let m = vec_monad().unwrap();
        let k0: Kleisli<VecKind, i64, i64> = Kleisli::new(|x: i64| vec![x, x + 1]);
        let k1: Kleisli<VecKind, i64, String> = Kleisli::new(|x: i64| vec![format!("<{}>", x)]);
        let k2 = m.compose(k0, k1);
        assert_eq!(k2.run(4), vec!["<4>", "<5>"]);
    }

    #[test]
    fn test_binds() {
        let m = vec_monad().unwrap();
        let result = monad_binds!(m;
            { vec![1, 2] }
            >>= { Kleisli::new(|x: i64| vec![x, x * 10]) }
            >>= { Kleisli::new(|x: i64| vec![x + 1]) }
        );
        assert_eq!(result, vec![2, 11, 3, 21]);
    }

    #[test]
    fn test_do() {
        let m = vec_monad().unwrap();
        let pairs = monad_do!(m;
            x <- vec![1, 2],
            y <- vec!['a', 'b'],
            m.point((x, y))
        );
        assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);

        let sums = monad_do!(m;
            x <- vec![10, 20],
            y = x + 1,
            vec![(), ()],
            m.point(y)
        );
        assert_eq!(sums, vec![11, 11, 21, 21]);
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Span {
        lo: i64,
        hi: i64,
    }

    #[test]
    fn test_do_typed() {
        let m = vec_monad().unwrap();
        let widths = monad_do!(m;
            (s: Span) <- vec![Span { lo: 0, hi: 3 }, Span { lo: 5, hi: 6 }],
            w = s.hi - s.lo,
            (t: String) <- vec!["a".to_string(), "bc".to_string()],
            m.point(w * t.len() as i64)
        );
        assert_eq!(widths, vec![3, 6, 1, 2]);
    }
}
