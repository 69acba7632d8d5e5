#![forbid(unsafe_code)]

//! The built-in exercises.
//!
//! Each is a small Python program traced start to finish: a listing, a
//! classic layout (code on top, terminal below, variables beside it),
//! and a script unrolled from the run the author chose to narrate.

use lockstep::{AuthoringResult, Exercise, ScriptBuilder, SourceText, Surface, WidgetKind};

/// Names accepted by [`by_name`], in display order.
pub const NAMES: [&str; 2] = ["packing-list", "summing-loop"];

/// Look up a built-in exercise.
pub fn by_name(name: &str) -> Option<AuthoringResult<Exercise>> {
    match name {
        "packing-list" => Some(packing_list()),
        "summing-loop" => Some(summing_loop()),
        _ => None,
    }
}

/// A branching program, traced down its "yes" branch: ask about air
/// travel, build the packing list, and print it.
pub fn packing_list() -> AuthoringResult<Exercise> {
    let source = SourceText::new(
        r#"
plane_answer: str
packing_list: str = ""

# Obtain the answer to the air travel question from the user.
plane_answer = input("Are you traveling by plane? (yes / no): ")

# Determine what should be packed based on the travel answer.
if plane_answer == "yes":
    packing_list += "headphones\nreading material"

# Display the packing list to the user.
if packing_list != "":
    print(packing_list)
"#,
    );

    let mut surface = Surface::new();
    surface.place(0, 0, WidgetKind::Code)?;
    surface.place(15, 0, WidgetKind::Terminal)?;
    surface.place(15, 55, WidgetKind::Frame)?;

    let mut b = ScriptBuilder::new();
    b.jump(2).assign("packing_list", "");
    b.note("Initialize packing_list to the empty string.");
    b.jump(5)
        .ask_input("Are you traveling by plane? (yes / no): ");
    b.assign("plane_answer", "yes");
    b.ask_line(8).ask_line(9);
    b.assign("packing_list", "headphones\nreading material");
    b.jump(12).pause();
    b.jump(13).println("headphones").println("reading material");

    Exercise::new(source, surface, b.finish())
}

/// A counted loop accumulating three typed numbers, with the learner
/// predicting each jump and computing the running total.
pub fn summing_loop() -> AuthoringResult<Exercise> {
    let source = SourceText::new(
        r#"
# Sum three whole numbers typed by the user.

# Annotate the variables the loop will use.
num: int
i: int

total: int = 0

# Read and accumulate three numbers.
for i in range(3):
    num = int(input("Please enter a whole number: "))
    total += num

# Report the result.
print(f"The total of your values is {total}.")
"#,
    );

    let mut surface = Surface::new();
    surface.place(0, 0, WidgetKind::Code)?;
    surface.place(17, 0, WidgetKind::Terminal)?;
    surface.place(17, 55, WidgetKind::Frame)?;

    let mut b = ScriptBuilder::new();
    b.jump(5).note("Annotate variables.");
    b.jump(7).note("Initialize the accumulator total to zero.");
    b.assign("total", 0);
    b.ask_line(10).assign("i", 0);
    let mut total = 0i64;
    for (pass, num) in [3i64, 4, 5].into_iter().enumerate() {
        total += num;
        b.ask_line(11)
            .ask_input("Please enter a whole number: ")
            .assign("num", num);
        b.jump(12)
            .ask_expr(total, "Please enter the new value for total.")
            .assign("total", total);
        b.ask_line(10).assign("i", pass as i64 + 1);
    }
    b.ask_line(15)
        .println(format!("The total of your values is {total}."));

    Exercise::new(source, surface, b.finish())
}
