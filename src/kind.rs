use std::rc::Rc;


// Anything that may sit inside a wrapper. Derived operations capture values
// in Rc closures and may run a continuation more than once (lists).
pub trait Element: Clone + 'static {}

impl<T: Clone + 'static> Element for T {}


// Stands in for a type constructor `m`, e.g. `VecKind::Of<i64> == Vec<i64>`.
pub trait Kind: 'static {
    type Of<Ta: Element>: Element;
}


// a -> b
pub type Func<Ta, Tb> = Rc<dyn Fn(Ta) -> Tb>;

pub fn func<Ta, Tb>(f_ab: impl Fn(Ta) -> Tb + 'static) -> Func<Ta, Tb> {
    Rc::new(f_ab)
}


// a -> m b
pub struct Kleisli<K: Kind, Ta, Tb: Element> {
    pub kleisli: Rc<dyn Fn(Ta) -> K::Of<Tb>>
}

impl<K: Kind, Ta, Tb: Element> Kleisli<K, Ta, Tb> {
    pub fn new(k_ab: impl Fn(Ta) -> K::Of<Tb> + 'static) -> Self {
        Kleisli { kleisli: Rc::new(k_ab) }
    }

    pub fn run(&self, a: Ta) -> K::Of<Tb> {
        (self.kleisli)(a)
    }
}

impl<K: Kind, Ta, Tb: Element> Clone for Kleisli<K, Ta, Tb> {
    fn clone(&self) -> Self {
        Kleisli { kleisli: self.kleisli.clone() }
    }
}
