//! Built-in page content.
//!
//! The catalog is a static table: one entry per design pattern plus the
//! coupling page, in navigation order. [`builtin_pages`] runs every entry
//! through the same validation as content files, so a broken entry fails at
//! startup instead of at render time.

use crate::page::{Landing, PageDefinition, PageDraft, PageError, Section};

struct BuiltinPage {
    id: &'static str,
    title: &'static str,
    summary: &'static str,
    intro: &'static [&'static str],
    explanation: &'static [&'static str],
    code_heading: Option<&'static str>,
    code: &'static str,
    notes: &'static [&'static str],
    sections: &'static [BuiltinSection],
}

struct BuiltinSection {
    heading: &'static str,
    code: &'static str,
    notes: &'static [&'static str],
}

impl BuiltinPage {
    fn to_draft(&self) -> PageDraft {
        PageDraft {
            id: self.id.to_string(),
            title: self.title.to_string(),
            summary: self.summary.to_string(),
            intro: self.intro.iter().map(|p| p.to_string()).collect(),
            explanation: self.explanation.iter().map(|p| p.to_string()).collect(),
            language: None,
            code_heading: self.code_heading.map(str::to_string),
            code_sample: self.code.to_string(),
            code_notes: self.notes.iter().map(|n| n.to_string()).collect(),
            sections: self
                .sections
                .iter()
                .map(|s| Section {
                    heading: s.heading.to_string(),
                    code_sample: s.code.to_string(),
                    notes: s.notes.iter().map(|n| n.to_string()).collect(),
                })
                .collect(),
        }
    }
}

pub const LANDING_TITLE: &str = "ChatGPT | Software Design Patterns";

pub const LANDING_DESCRIPTION: &str = "This application showcases ChatGPT and its ability to \
explain and show examples/implementations of common software design patterns.";

/// The default landing page.
pub fn landing() -> Landing {
    Landing {
        title: LANDING_TITLE.to_string(),
        description: LANDING_DESCRIPTION.to_string(),
    }
}

/// All built-in pages, validated, in navigation order.
pub fn builtin_pages() -> Result<Vec<PageDefinition>, PageError> {
    BUILTIN
        .iter()
        .map(|b| PageDefinition::try_from(b.to_draft()))
        .collect()
}

/// Ids of the built-in pages in navigation order.
pub fn builtin_ids() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|b| b.id)
}

const BUILTIN: &[BuiltinPage] = &[
    BuiltinPage {
        id: "bridge",
        title: "Bridge Design Pattern | Structural",
        summary: "The Bridge design pattern is a structural design pattern that divides an \
object's implementation into an interface and an implementation class. It allows the \
implementation class to vary independently from the interface class.",
        intro: &[],
        explanation: &[
            "In this example, the 'Abstraction' class defines the interface for the methods \
that will be implemented by the 'Implementor' class. The 'ConcreteImplementor' classes \
provide concrete implementations of the 'Implementor' interface.",
            "The 'Client' code uses the 'Abstraction' class, which selects the appropriate \
'ConcreteImplementor' object to use based on its current state.",
        ],
        code_heading: None,
        code: r#"from abc import ABC, abstractmethod

# The Abstraction class is the class that will use the Implementor class.
# It defines the interface for the methods that will be implemented by the Implementor.
class Abstraction:
  def __init__(self, implementor):
    self._implementor = implementor

  def operation(self):
    return self._implementor.operation_implementation()

# The Implementor interface declares the methods that will be implemented by the Concrete Implementors.
class Implementor(ABC):
  @abstractmethod
  def operation_implementation(self):
    pass

# Concrete Implementors provide concrete implementation of the Implementor interface.
class ConcreteImplementorA(Implementor):
  def operation_implementation(self):
    return "Concrete Implementor A"

class ConcreteImplementorB(Implementor):
  def operation_implementation(self):
    return "Concrete Implementor B"

# Client code
def client_code(abstraction):
  print(abstraction.operation())

abstraction = Abstraction(ConcreteImplementorA())
client_code(abstraction)

abstraction.set_implementor(ConcreteImplementorB())
client_code(abstraction)"#,
        notes: &[],
        sections: &[],
    },
    BuiltinPage {
        id: "command",
        title: "Command Design Pattern | Behavioral",
        summary: "The Command design pattern is a behavioral design pattern that allows you \
to encapsulate a request as an object, separate from the object that actually processes the \
request. This allows you to parametrize clients with different requests, queue or log \
requests, and support undoable operations.",
        intro: &[],
        explanation: &[
            "In this example, the 'Command' interface declares a method for executing a \
command. The 'Receiver' class knows how to perform the operations associated with carrying \
out a request.",
            "The 'ConcreteCommand' class defines a binding between a 'Receiver' object and an \
action, and implements the 'Command' interface by calling the corresponding operation(s) on \
the 'Receiver'.",
            "The 'Invoker' class asks the command to carry out the request. The 'Client' code \
creates a 'Receiver', 'ConcreteCommand', and Invoker object and then invokes the command \
twice.",
        ],
        code_heading: None,
        code: r#"# The Command interface declares a method for executing a command.
class Command(ABC):
  @abstractmethod
  def execute(self):
    pass

# The Receiver class knows how to perform the operations associated with carrying out a request.
class Receiver:
  def action(self):
    print("Receiver: Performing an action.")

# The ConcreteCommand class defines a binding between a Receiver object and an action.
# The ConcreteCommand implements the Command interface by calling the corresponding operation(s) on the Receiver.
class ConcreteCommand(Command):
  def __init__(self, receiver):
    self._receiver = receiver

  def execute(self):
    self._receiver.action()

# The Invoker class asks the command to carry out the request.
class Invoker:
  def __init__(self, command):
    self._command = command

  def set_command(self, command):
    self._command = command

  def invoke(self):
    self._command.execute()

# Client code
receiver = Receiver()
command = ConcreteCommand(receiver)
invoker = Invoker(command)

invoker.invoke()

invoker.set_command(ConcreteCommand(receiver))
invoker.invoke()"#,
        notes: &[],
        sections: &[],
    },
    BuiltinPage {
        id: "observer",
        title: "Observer Design Pattern | Behavioral",
        summary: "The Observer design pattern is a behavioral design pattern that allows an \
object to subscribe to events and receive notifications when those events occur. It enables \
a one-to-many dependency between objects, so that when one object changes its state, all of \
its subscribers are notified and updated automatically.",
        intro: &[],
        explanation: &[
            "In this example, the 'Subject' class generates events and notifies its \
'Observer' objects when its state changes.",
            "The 'ConcreteObserver' classes implement the 'Observer' interface and provide \
concrete implementations of the 'update' method to receive notifications from the 'Subject' \
and react to them.",
            "The 'Client' code uses the 'Subject' class and the 'ConcreteObserver' classes to \
subscribe to and receive notifications of events.",
        ],
        code_heading: None,
        code: r#"from abc import ABC, abstractmethod

# The Subject class is the class that will generate events and notify its observers.
class Subject:
  def __init__(self):
    self._observers = []
    self._state = None

  def attach(self, observer):
    self._observers.append(observer)

  def detach(self, observer):
    self._observers.remove(observer)

  def notify(self):
    for observer in self._observers:
      observer.update(self)

  @property
  def state(self):
    return self._state

  @state.setter
  def state(self, state):
    self._state = state
    self.notify()

# The Observer interface declares the update method, which is called by the Subject when the Subject's state changes.
class Observer(ABC):
  @abstractmethod
  def update(self, subject):
    pass

# Concrete Observers implement the update method to receive notifications from the Subject and react to them.
class ConcreteObserverA(Observer):
  def update(self, subject):
    if subject.state < 3:
      print("ConcreteObserverA: Reacted to the event")

class ConcreteObserverB(Observer):
  def update(self, subject):
    if subject.state == 0 or subject.state >= 2:
      print("ConcreteObserverB: Reacted to the event")

# Client code
subject = Subject()

observer_a = ConcreteObserverA()
subject.attach(observer_a)

observer_b = ConcreteObserverB()
subject.attach(observer_b)

subject.state = 1
subject.state = 2
subject.detach(observer_a)
subject.state = 3"#,
        notes: &[],
        sections: &[],
    },
    BuiltinPage {
        id: "strategy",
        title: "Strategy Design Pattern | Behavioral",
        summary: "The strategy design pattern is a behavioral design pattern that allows you \
to define a set of interchangeable algorithms or behaviors, and make them interchangeable \
within an object.",
        intro: &[],
        explanation: &[
            "In this example, the 'Strategy' interface defines the 'execute()' method, which \
is implemented by the concrete strategies 'ConcreteStrategyA' and 'ConcreteStrategyB'.",
            "The 'Context' class holds a reference to a strategy object and allows the client \
code to change the strategy at runtime by calling the 'set_strategy()' method. The client \
code can then execute the selected strategy by calling the 'execute_strategy()' method.",
        ],
        code_heading: None,
        code: r#"from abc import ABC, abstractmethod

# Create an interface for the strategy
class Strategy(ABC):
    @abstractmethod
    def execute(self):
        pass

# Concrete strategies
class ConcreteStrategyA(Strategy):
    def execute(self):
        print("Executing strategy A")

class ConcreteStrategyB(Strategy):
    def execute(self):
        print("Executing strategy B")

# Context class
class Context:
    def __init__(self, strategy: Strategy):
        self._strategy = strategy

    def set_strategy(self, strategy: Strategy):
        self._strategy = strategy

    def execute_strategy(self):
        self._strategy.execute()

# Client code
context = Context(ConcreteStrategyA())
context.execute_strategy()  # Output: "Executing strategy A"

context.set_strategy(ConcreteStrategyB())
context.execute_strategy()  # Output: "Executing strategy B""#,
        notes: &[],
        sections: &[],
    },
    BuiltinPage {
        id: "adapter",
        title: "Adapter Design Pattern | Structural",
        summary: "The Adapter design pattern is a structural design pattern that allows you \
to adapt the interface of a class to another interface that clients expect. It allows \
classes with incompatible interfaces to work together by wrapping an adapter class around \
the class with the incompatible interface.",
        intro: &[],
        explanation: &[
            "In this example, the 'Target' interface represents the interface that the \
client expects, and the 'Adaptee' class contains the interface that the client needs to \
adapt to.",
            "The 'Adapter' class adapts the 'Adaptee' class to the 'Target' interface by \
implementing the request method and calling the 'specific_request' method on the 'Adaptee' \
object.",
            "The 'Client' code uses the 'Target' interface and is unaware of the specific \
type of object it is using.",
        ],
        code_heading: None,
        code: r#"# The Target interface represents the interface that the client expects.
class Target(ABC):
  @abstractmethod
  def request(self):
    pass

# The Adaptee class contains the interface that the client needs to adapt to.
class Adaptee:
  def specific_request(self):
    return ".eetpadA eht fo roivaheb laicepS"

# The Adapter class adapts the Adaptee class to the Target interface.
class Adapter(Target):
  def __init__(self, adaptee):
    self._adaptee = adaptee

  def request(self):
    return self._adaptee.specific_request()[::-1]

# Client code
def client_code(target):
  print(target.request())

adaptee = Adaptee()
client_code(Adapter(adaptee))"#,
        notes: &[],
        sections: &[],
    },
    BuiltinPage {
        id: "factory",
        title: "Factory Design Pattern | Creational",
        summary: "The Factory design pattern is a creational design pattern that provides an \
interface for creating objects in a super class, but allows subclasses to alter the type of \
objects that will be created. It enables the creation of objects without specifying the \
exact class of object that will be created.",
        intro: &[],
        explanation: &[
            "In this example, the 'Product' interface declares the operations that all \
concrete products must implement. The 'ConcreteProduct' classes provide various \
implementations of the 'Product' interface.",
            "The 'Creator' class declares the factory method that is supposed to return an \
object of type 'Product', but the implementation of this method is provided by the \
'ConcreteCreator' classes.",
            "The 'Client' code uses the 'Creator' class and the 'ConcreteCreator' classes, \
but is unaware of the specific type of 'Product' that will be created.",
        ],
        code_heading: None,
        code: r#"from abc import ABC, abstractmethod

# The Product interface declares the operations that all concrete products must implement.
class Product(ABC):
  @abstractmethod
  def operation(self):
    pass

# Concrete Products provide various implementations of the Product interface.
class ConcreteProductA(Product):
  def operation(self):
    return "Result of the ConcreteProductA operation"

class ConcreteProductB(Product):
  def operation(self):
    return "Result of the ConcreteProductB operation"

# The Creator class declares the factory method that is supposed to return an object of type Product.
# The Creator's subclasses usually provide the implementation of this method.
class Creator(ABC):
  @abstractmethod
  def factory_method(self):
    pass

  def some_operation(self):
    # Call the factory method to create a Product object.
    product = self.factory_method()
    # Now, use the product.
    result = product.operation()
    return result

# Concrete Creators override the factory method to change the resulting product's type.
class ConcreteCreatorA(Creator):
  def factory_method(self):
    return ConcreteProductA()

class ConcreteCreatorB(Creator):
  def factory_method(self):
    return ConcreteProductB()

# Client code
def client_code(creator):
  print(f"Client: Im not aware of the creator's class, but it still works."
        f"{creator.some_operation()}")

client_code(ConcreteCreatorA())
client_code(ConcreteCreatorB())"#,
        notes: &[],
        sections: &[],
    },
    BuiltinPage {
        id: "extras",
        title: "Coupling",
        summary: "In software development, coupling refers to the degree to which one module \
or component in a system depends on or is connected to other modules or components.",
        intro: &["High coupling means that a module is heavily dependent on other \
modules, while low coupling means that a module is more independent and can function more \
independently of other parts of the system."],
        explanation: &[],
        code_heading: Some("Example of code with HIGH Coupling"),
        code: r#"class A:
    def __init__(self):
        self.b = B()

    def do_something(self):
        self.b.do_something_else()

class B:
    def do_something_else(self):
        print("Doing something else")"#,
        notes: &["In this example, class A is tightly coupled to class B because it creates an \
instance of B in its constructor and depends on it to perform the 'do_something_else' method. \
This means that if the implementation of class B changes, it will likely affect the behavior \
of class A as well."],
        sections: &[BuiltinSection {
            heading: "Example of code with LOW Coupling",
            code: r#"class A:
    def __init__(self, b):
        self.b = b

    def do_something(self):
        self.b.do_something_else()

class B:
    def do_something_else(self):
        print("Doing something else")

b = B()
a = A(b)
a.do_something()"#,
            notes: &[
                "In this example, class A is not tightly coupled to class B because it \
receives an instance of B as an argument in its constructor, rather than creating one \
itself. This means that class A is less dependent on class B and can function independently \
of it to some degree. If the implementation of class B changes, it may not necessarily \
affect the behavior of class A.",
                "It is generally considered good software design to aim for low coupling, as \
it can make a system more flexible and easier to maintain. High coupling can make it more \
difficult to make changes to a system without affecting other parts of the system.",
            ],
        }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PageRegistry;

    #[test]
    fn all_builtin_pages_validate() {
        let pages = builtin_pages().unwrap();
        assert_eq!(pages.len(), 7);
    }

    #[test]
    fn builtin_ids_are_unique() {
        let pages = builtin_pages().unwrap();
        assert!(PageRegistry::from_pages(pages).is_ok());
    }

    #[test]
    fn navigation_order() {
        let ids: Vec<&str> = builtin_ids().collect();
        assert_eq!(
            ids,
            [
                "bridge", "command", "observer", "strategy", "adapter", "factory", "extras"
            ]
        );
    }

    #[test]
    fn strategy_page_content() {
        let pages = builtin_pages().unwrap();
        let strategy = pages.iter().find(|p| p.id() == "strategy").unwrap();
        assert_eq!(strategy.title(), "Strategy Design Pattern | Behavioral");
        assert_eq!(strategy.explanation().len(), 2);
        assert!(strategy.code_sample().starts_with("from abc import ABC"));
        assert!(
            strategy
                .code_sample()
                .ends_with(r#"context.execute_strategy()  # Output: "Executing strategy B""#)
        );
    }

    #[test]
    fn code_samples_keep_indentation() {
        let pages = builtin_pages().unwrap();
        let bridge = pages.iter().find(|p| p.id() == "bridge").unwrap();
        assert!(bridge.code_sample().contains("\n  def __init__(self, implementor):\n"));
    }

    #[test]
    fn extras_page_has_two_listings() {
        let pages = builtin_pages().unwrap();
        let extras = pages.iter().find(|p| p.id() == "extras").unwrap();
        assert_eq!(extras.code_heading(), "Example of code with HIGH Coupling");
        assert!(extras.explanation().is_empty());
        assert_eq!(extras.intro().len(), 1);
        assert!(extras.intro()[0].starts_with("High coupling means"));
        assert_eq!(extras.code_notes().len(), 1);
        assert!(extras.code_notes()[0].contains("tightly coupled"));
        assert_eq!(extras.sections().len(), 1);
        assert_eq!(extras.sections()[0].notes.len(), 2);
        assert!(extras.sections()[0].code_sample.ends_with("a.do_something()"));
    }

    #[test]
    fn landing_defaults() {
        let landing = landing();
        assert_eq!(landing.title, "ChatGPT | Software Design Patterns");
        assert!(landing.description.contains("design patterns"));
    }
}
