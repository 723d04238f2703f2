//! Structs, impl blocks and traits.

use std::fmt;
use std::io::Write;
use std::ops::Add;

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Traits";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "struct_impl",
            CATEGORY,
            "Structs with associated functions and methods",
            ExampleFn::Plain(struct_impl),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch05-03-method-syntax.html")
        .with_snippet("impl Rectangle {\n    fn square(size: u32) -> Self { ... }\n    fn area(&self) -> u32 { self.width * self.height }\n}"),
    )?;
    registry.register(
        Example::new(
            "trait_objects",
            CATEGORY,
            "Dynamic dispatch over a Vec<Box<dyn Shape>>",
            ExampleFn::Plain(trait_objects),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch17-02-trait-objects.html"),
    )?;
    registry.register(
        Example::new(
            "generics_bounds",
            CATEGORY,
            "Generic functions with trait bounds and where clauses",
            ExampleFn::Plain(generics_bounds),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch10-01-syntax.html"),
    )?;
    registry.register(
        Example::new(
            "operator_traits",
            CATEGORY,
            "Display, Add and PartialOrd implemented for a custom type",
            ExampleFn::Plain(operator_traits),
        )
        .with_doc_url("https://doc.rust-lang.org/std/ops/index.html")
        .with_snippet("impl Add for Point {\n    type Output = Point;\n    fn add(self, other: Point) -> Point { ... }\n}"),
    )?;
    Ok(())
}

#[derive(Debug)]
struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    fn area(&self) -> u32 {
        self.width * self.height
    }

    fn can_hold(&self, other: &Rectangle) -> bool {
        self.width > other.width && self.height > other.height
    }
}

fn struct_impl(out: &mut Output<'_>) -> ExampleResult {
    let rect = Rectangle {
        width: 30,
        height: 50,
    };
    let square = Rectangle::square(10);
    writeln!(out, "{rect:?} has area {}", rect.area())?;
    writeln!(out, "{square:?} has area {}", square.area())?;
    writeln!(out, "rect can hold square: {}", rect.can_hold(&square))?;
    Ok(())
}

trait Shape {
    fn name(&self) -> String;
    fn area(&self) -> f64;

    fn describe(&self) -> String {
        format!("{} with area {:.2}", self.name(), self.area())
    }
}

struct Circle {
    radius: f64,
}

struct Square {
    side: f64,
}

impl Shape for Circle {
    fn name(&self) -> String {
        format!("Circle(r={})", self.radius)
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Shape for Square {
    fn name(&self) -> String {
        format!("Square(side={})", self.side)
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

fn trait_objects(out: &mut Output<'_>) -> ExampleResult {
    out.show("let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Circle { radius: 1.0 }), ...];")?;
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle { radius: 1.0 }),
        Box::new(Square { side: 2.0 }),
        Box::new(Circle { radius: 0.5 }),
    ];
    for shape in &shapes {
        writeln!(out, "  {}", shape.describe())?;
    }
    let total: f64 = shapes.iter().map(|s| s.area()).sum();
    writeln!(out, "Total area: {total:.2}")?;
    Ok(())
}

fn largest<T: PartialOrd + Copy>(items: &[T]) -> Option<T> {
    let mut iter = items.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, |best, item| if item > best { item } else { best }))
}

fn describe_all<T>(items: &[T]) -> String
where
    T: fmt::Display,
{
    items
        .iter()
        .map(|item| format!("<{item}>"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn generics_bounds(out: &mut Output<'_>) -> ExampleResult {
    out.show("fn largest<T: PartialOrd + Copy>(items: &[T]) -> Option<T>")?;
    writeln!(out, "largest i32  = {:?}", largest(&[34, 50, 25, 100, 65]))?;
    writeln!(out, "largest char = {:?}", largest(&['y', 'm', 'a', 'q']))?;
    writeln!(out, "largest of none = {:?}", largest::<u8>(&[]))?;

    out.show("fn describe_all<T>(items: &[T]) -> String\nwhere\n    T: fmt::Display,")?;
    writeln!(out, "{}", describe_all(&["a", "b", "c"]))?;
    writeln!(out, "{}", describe_all(&[1.5, 2.5]))?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct Point {
    x: i32,
    y: i32,
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn operator_traits(out: &mut Output<'_>) -> ExampleResult {
    let a = Point { x: 1, y: 2 };
    let b = Point { x: 3, y: 4 };
    writeln!(out, "{a} + {b} = {}", a + b)?;
    writeln!(out, "Debug: {:?}", a + b)?;
    let same = Point { x: 1, y: 2 };
    writeln!(out, "{a} == {same}: {}", a == same)?;
    writeln!(out, "{a} < {b}: {}", a < b)?;
    Ok(())
}
