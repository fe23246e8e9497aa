use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use monad_builder::monad_do;
use monad_builder::monads::option::option_monad;
use monad_builder::monads::reader::{load, reader_monad};
use monad_builder::monads::vec::vec_monad;
use monad_builder::monads::writer::{log, writer_monad};
use monad_builder::{func, Kleisli};


fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    ///////////////////// List //////////////////////////////////

    let array = vec_monad()?;

    let a1 = vec!['a', 'b', 'c'];
    let a2 = array.map(a1.clone(), func(|a: char| format!("{}...", a)));
    println!("array map {:?} ==> {:?}", a1, a2);

    let a1 = vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e']];
    let a2 = array.join(a1.clone());
    println!("array join {:?} ==> {:?}", a1, a2);

    let a1 = vec![3, 7];
    let a2 = array.bind(a1.clone(), Kleisli::new(|a: i64| vec![a.to_string(), (a + 3).to_string()]));
    println!("array bind {:?} ==> {:?}", a1, a2);

    let xs = vec![3, 7];
    let ys = vec![1, 2];
    let zs = array.lift_a2_curried()(xs.clone())(ys.clone())(func(|x: i64| func(move |y: i64| vec![x, y])));
    println!("liftA2 {:?} {:?} ==> {:?}", xs, ys, zs);

    ///////////////////// Writer //////////////////////////////////

    let writer = writer_monad::<Vec<String>>()?;
    let do_calculation = |x: i64| monad_do!(writer;
        log(vec![format!("received number {}", x)]),
        x0 = x + 10,
        log(vec!["added 10 to the number".to_string()]),
        x1 = 2 * x0,
        log(vec!["multiplied result by 2".to_string()]),
        writer.point(x1)
    );
    let (value, entries) = do_calculation(5);
    println!("writer {} <== {:?}", value, entries);

    ///////////////////// Reader //////////////////////////////////

    let reader = reader_monad::<(String, String)>()?;
    let login = monad_do!(reader;
        (cfg: (String, String)) <- load(),
        reader.point(format!("{}@{}", cfg.0, cfg.1))
    );
    println!("reader {}", login.run(("root".to_string(), "localhost".to_string())));

    ///////////////////// Option //////////////////////////////////

    let option = option_monad()?;
    let halve = |x: i64| if x % 2 == 0 { Some(x / 2) } else { None };
    for start in [40, 12, 6] {
        let quarter = monad_do!(option;
            h <- halve(start),
            q <- halve(h),
            option.point(q)
        );
        println!("option quarter of {} ==> {:?}", start, quarter);
    }

    info!("done");
    Ok(())
}
