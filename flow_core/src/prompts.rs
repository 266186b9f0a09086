//! # Example Prompt Catalog
//!
//! Curated example inputs surfaced in the text editor so a first-time user
//! has something to try. Grouped by category; the GUI cycles through the
//! flattened list with [`nth`].

/// A category of example prompts.
#[derive(Debug, Clone, Copy)]
pub struct PromptCategory {
    pub name: &'static str,
    pub examples: &'static [&'static str],
}

/// All example prompts, grouped by category.
pub const CATALOG: &[PromptCategory] = &[
    PromptCategory {
        name: "Sorting Algorithms",
        examples: &[
            "Create a function that sorts an array using bubble sort algorithm",
            "Implement quicksort algorithm to sort numbers in ascending order",
            "Build a merge sort function that divides and conquers an array",
            "Design an insertion sort algorithm for small datasets",
            "Create a heap sort implementation for efficient sorting",
        ],
    },
    PromptCategory {
        name: "Search Algorithms",
        examples: &[
            "Implement binary search to find an element in a sorted array",
            "Create a linear search function to find a value in an unsorted list",
            "Build a depth-first search algorithm for tree traversal",
            "Design breadth-first search for finding shortest path in a graph",
            "Implement hash table search with collision handling",
        ],
    },
    PromptCategory {
        name: "Data Structures",
        examples: &[
            "Create a stack data structure with push, pop, and peek operations",
            "Implement a queue with enqueue and dequeue functionality",
            "Build a binary tree with insert, delete, and search methods",
            "Design a linked list with add, remove, and traverse operations",
            "Create a hash map with dynamic resizing capabilities",
        ],
    },
    PromptCategory {
        name: "Mathematical Algorithms",
        examples: &[
            "Calculate factorial of a number using recursion and iteration",
            "Generate Fibonacci sequence up to n terms using dynamic programming",
            "Find the greatest common divisor (GCD) using Euclidean algorithm",
            "Implement prime number checker using sieve of Eratosthenes",
            "Create a function to calculate power of a number efficiently",
        ],
    },
    PromptCategory {
        name: "String Processing",
        examples: &[
            "Check if a string is a palindrome ignoring case and spaces",
            "Find all anagrams of a word in a list of strings",
            "Implement string pattern matching using KMP algorithm",
            "Create a function to reverse words in a sentence",
            "Build a text compression algorithm using character frequency",
        ],
    },
    PromptCategory {
        name: "Web Development",
        examples: &[
            "Create a REST API endpoint that handles user authentication",
            "Build a responsive navigation menu with dropdown functionality",
            "Implement form validation with error handling and user feedback",
            "Design a shopping cart system with add, remove, and total calculation",
            "Create a real-time chat application with WebSocket connections",
        ],
    },
    PromptCategory {
        name: "Game Development",
        examples: &[
            "Create a tic-tac-toe game with win condition checking",
            "Implement a rock-paper-scissors game with score tracking",
            "Build a number guessing game with hints and attempts counter",
            "Design a simple 2D collision detection system",
            "Create a maze generator using recursive backtracking",
        ],
    },
];

/// Number of prompts across all categories.
pub fn total() -> usize {
    CATALOG.iter().map(|c| c.examples.len()).sum()
}

/// The `index`-th prompt in catalog order, wrapping past the end.
///
/// Returns `(category name, prompt text)`.
pub fn nth(index: usize) -> (&'static str, &'static str) {
    let total = total();
    let mut remaining = index % total;
    for category in CATALOG {
        if remaining < category.examples.len() {
            return (category.name, category.examples[remaining]);
        }
        remaining -= category.examples.len();
    }
    // total() spans exactly the flattened catalog
    unreachable!("prompt index out of range after modulo")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_nonempty() {
        assert!(total() >= 35);
    }

    #[test]
    fn test_nth_wraps() {
        let (cat_first, first) = nth(0);
        assert_eq!(cat_first, "Sorting Algorithms");
        assert_eq!(nth(total()), (cat_first, first));
    }

    #[test]
    fn test_nth_crosses_categories() {
        let (category, _) = nth(5);
        assert_eq!(category, "Search Algorithms");
    }
}
