use std::rc::Rc;

use crate::kind::{Element, Func, Kind, Kleisli};
use crate::monad::Monad;
use crate::ops::{Ap, Bind, Join, Map, Point};


// Curried views of every operation: each stage takes one argument and hands
// back a function waiting for the next one, so `bind_curried()(ma)(k_ab)`
// is `bind(ma, k_ab)`. Earlier arguments are cloned on every later call.
impl<K, P, B, M, J, A> Monad<K, P, B, M, J, A>
where
    K: Kind,
    P: Point<K> + Clone + 'static,
    B: Bind<K> + Clone + 'static,
    M: Map<K> + Clone + 'static,
    J: Join<K> + Clone + 'static,
    A: Ap<K> + Clone + 'static,
{
    pub fn point_curried<Ta: Element>(&self) -> Func<Ta, K::Of<Ta>> {
        let this = self.clone();
        Rc::new(move |a: Ta| this.point::<Ta>(a))
    }

    pub fn bind_curried<Ta: Element, Tb: Element>(&self) -> Func<K::Of<Ta>, Func<Kleisli<K, Ta, Tb>, K::Of<Tb>>> {
        let this = self.clone();
        Rc::new(move |ma: K::Of<Ta>| -> Func<Kleisli<K, Ta, Tb>, K::Of<Tb>> {
            let this = this.clone();
            Rc::new(move |k_ab: Kleisli<K, Ta, Tb>| this.bind::<Ta, Tb>(ma.clone(), k_ab))
        })
    }

    pub fn map_curried<Ta: Element, Tb: Element>(&self) -> Func<K::Of<Ta>, Func<Func<Ta, Tb>, K::Of<Tb>>> {
        let this = self.clone();
        Rc::new(move |ma: K::Of<Ta>| -> Func<Func<Ta, Tb>, K::Of<Tb>> {
            let this = this.clone();
            Rc::new(move |f_ab: Func<Ta, Tb>| this.map::<Ta, Tb>(ma.clone(), f_ab))
        })
    }

    pub fn join_curried<Ta: Element>(&self) -> Func<K::Of<K::Of<Ta>>, K::Of<Ta>> {
        let this = self.clone();
        Rc::new(move |mma: K::Of<K::Of<Ta>>| this.join::<Ta>(mma))
    }

    pub fn ap_curried<Ta: Element, Tb: Element>(&self) -> Func<K::Of<Ta>, Func<K::Of<Func<Ta, Tb>>, K::Of<Tb>>> {
        let this = self.clone();
        Rc::new(move |ma: K::Of<Ta>| -> Func<K::Of<Func<Ta, Tb>>, K::Of<Tb>> {
            let this = this.clone();
            Rc::new(move |mf: K::Of<Func<Ta, Tb>>| this.ap::<Ta, Tb>(ma.clone(), mf))
        })
    }

    // m a -> m b -> (a -> b -> c) -> m c
    pub fn lift_a2_curried<Ta: Element, Tb: Element, Tc: Element>(
        &self
    ) -> Func<K::Of<Ta>, Func<K::Of<Tb>, Func<Func<Ta, Func<Tb, Tc>>, K::Of<Tc>>>> {
        let this = self.clone();
        Rc::new(move |ma: K::Of<Ta>| -> Func<K::Of<Tb>, Func<Func<Ta, Func<Tb, Tc>>, K::Of<Tc>>> {
            let this = this.clone();
            Rc::new(move |mb: K::Of<Tb>| -> Func<Func<Ta, Func<Tb, Tc>>, K::Of<Tc>> {
                let this = this.clone();
                let ma = ma.clone();
                Rc::new(move |f_abc: Func<Ta, Func<Tb, Tc>>| {
                    this.lift_a2::<Ta, Tb, Tc>(ma.clone(), mb.clone(), f_abc)
                })
            })
        })
    }
}
