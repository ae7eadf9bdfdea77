use plainflag::FlagSet;

fn main() {
    let mut name = String::default();
    let mut times: i64 = 0;
    let mut shout = false;

    let mut flags = FlagSet::from_env();
    flags
        .string(&mut name, "name", "stranger")
        .int(&mut times, "times", 1)
        .boolean(&mut shout, "shout");

    if let Err(error) = flags.parse() {
        eprintln!("{error}");
        std::process::exit(1);
    }

    let leftovers = flags.into_args();
    let greeting = format!("hello {name}");

    for _ in 0..times {
        if shout {
            println!("{}", greeting.to_uppercase());
        } else {
            println!("{greeting}");
        }
    }

    println!("leftovers: {leftovers:?}");
}
