use chocopy_par::Parser;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const PROGRAM: &str = r#"
class Animal(object):
    name: str = ""
    sound: str = "..."

    def make_sound(self: "Animal") -> str:
        return self.sound

class Dog(Animal):
    def __init__(self: "Dog") -> object:
        self.name = "Rex"
        self.sound = "Woof"

def outer(x: int) -> int:
    total: int = 0

    def inner(y: int) -> int:
        return x + y

    for i in range(x):
        total = total + inner(i)
    return total

if outer(3) > 0:
    pass
else:
    pass
"#;

fn parse_program(source: &str) {
    Parser::parse(source).expect("benchmark source must parse cleanly");
}

fn bench_parser(c: &mut Criterion) {
    c.bench_function("parse_sample_program", |b| {
        b.iter(|| parse_program(black_box(PROGRAM)))
    });
}

criterion_group!(benches, bench_parser);
criterion_main!(benches);
