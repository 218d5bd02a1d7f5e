// Algorithm descriptions and Learn-mode question bank

use super::{AlgorithmInfo, Category, Complexity, Question, QuestionOption};
use crate::algorithms::AlgorithmId;

pub static BUBBLE_SORT: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::BubbleSort,
    name: "Bubble Sort",
    category: Category::Sorting,
    short: "Repeatedly compares adjacent elements and swaps them if they are in the wrong order.",
    invariant: "After each pass, the largest remaining element is fixed at the end. The sorted region grows from the right.",
    when_to_use: &[
        "Teaching / learning (very visual and intuitive).",
        "Very small arrays where simplicity matters.",
        "When you want to illustrate swap operations clearly.",
    ],
    complexity: Complexity {
        best: "O(n) (already sorted)",
        average: "O(n²)",
        worst: "O(n²)",
        space: "O(1)",
    },
    stable: Some(true),
    in_place: Some(true),
    notes: &[
        "Works by pushing the largest element to the end each pass.",
        "Inefficient for medium/large inputs (use better algorithms later).",
    ],
};

pub static INSERTION_SORT: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::InsertionSort,
    name: "Insertion Sort",
    category: Category::Sorting,
    short: "Builds a sorted region on the left by inserting each new element into its correct position.",
    invariant: "At any time, the left part (0..i) is sorted. We insert the key into the correct position by shifting bigger elements right.",
    when_to_use: &[
        "Small arrays or nearly sorted data.",
        "When you need a simple in-place algorithm.",
        "As a building block in hybrid sorts (conceptually).",
    ],
    complexity: Complexity {
        best: "O(n) (nearly sorted)",
        average: "O(n²)",
        worst: "O(n²)",
        space: "O(1)",
    },
    stable: Some(true),
    in_place: Some(true),
    notes: &[
        "Very good when the array is almost sorted.",
        "Feels like sorting playing cards in your hand.",
    ],
};

pub static SELECTION_SORT: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::SelectionSort,
    name: "Selection Sort",
    category: Category::Sorting,
    short: "Finds the minimum element from the unsorted region and swaps it into the next position in the sorted region.",
    invariant: "The prefix (0..i) is sorted. Each pass selects the minimum from the unsorted region and swaps it into position i.",
    when_to_use: &[
        "Teaching (clear 'pick minimum' logic).",
        "When swap count needs to be small (still O(n²) comparisons).",
        "Very small lists where simplicity is important.",
    ],
    complexity: Complexity {
        best: "O(n²)",
        average: "O(n²)",
        worst: "O(n²)",
        space: "O(1)",
    },
    stable: Some(false),
    in_place: Some(true),
    notes: &[
        "Always does ~n² comparisons, even if already sorted.",
        "Uses few swaps compared to Bubble.",
    ],
};

pub static BINARY_SEARCH: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::BinarySearch,
    name: "Binary Search",
    category: Category::Searching,
    short: "Searches a sorted array by repeatedly halving the search range.",
    invariant: "If the target is present, it lies between low and high. Each probe discards the half that cannot contain it.",
    when_to_use: &[
        "Fast lookup in sorted arrays/lists.",
        "You can afford sorting once, then many searches.",
        "When you want logarithmic-time search.",
    ],
    complexity: Complexity {
        best: "O(1)",
        average: "O(log n)",
        worst: "O(log n)",
        space: "O(1)",
    },
    stable: None,
    in_place: None,
    notes: &[
        "Requires sorted data.",
        "Each step cuts the search space in half.",
    ],
};

pub static MOVE_ZEROS: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::MoveZeros,
    name: "Move Zeros",
    category: Category::Other,
    short: "Moves every zero to the back in one pass, keeping the non-zero values in their original order.",
    invariant: "Everything before nz is a non-zero value in input order; everything from nz up to i is a zero.",
    when_to_use: &[
        "Compacting an array in place without extra memory.",
        "Learning the read/write two-pointer technique.",
        "Any stable partition by a yes/no property.",
    ],
    complexity: Complexity {
        best: "O(n)",
        average: "O(n)",
        worst: "O(n)",
        space: "O(1)",
    },
    stable: Some(true),
    in_place: Some(true),
    notes: &[
        "Each element is read exactly once.",
        "A swap only happens when a zero sits between nz and i.",
    ],
};

pub static BUBBLE_SORT_QUESTIONS: &[Question] = &[
    Question {
        id: "b1",
        prompt: "In Bubble Sort, what is the key operation repeated many times?",
        options: &[
            QuestionOption {
                id: "a",
                text: "Pick the smallest element and swap once per pass",
                correct: false,
                why: "That's Selection Sort, not Bubble Sort.",
            },
            QuestionOption {
                id: "b",
                text: "Compare adjacent elements and swap if out of order",
                correct: true,
                why: "Exactly. Bubble Sort repeatedly compares neighbors and swaps them.",
            },
            QuestionOption {
                id: "c",
                text: "Split array into halves and merge",
                correct: false,
                why: "That describes Merge Sort.",
            },
        ],
        tip: Some("Think: neighbors keep swapping until sorted."),
    },
    Question {
        id: "b2",
        prompt: "After the first full pass of Bubble Sort, what is guaranteed?",
        options: &[
            QuestionOption {
                id: "a",
                text: "The smallest element is at index 0",
                correct: false,
                why: "Not guaranteed. Bubble pushes the largest to the end per pass.",
            },
            QuestionOption {
                id: "b",
                text: "The largest element is at the last position",
                correct: true,
                why: "Yes. The largest value 'bubbles' to the end in a full pass.",
            },
            QuestionOption {
                id: "c",
                text: "Array becomes fully sorted",
                correct: false,
                why: "Only if it was already sorted or nearly sorted.",
            },
        ],
        tip: None,
    },
    Question {
        id: "b3",
        prompt: "Why is Bubble Sort O(n²) in the worst case?",
        options: &[
            QuestionOption {
                id: "a",
                text: "Because it always uses recursion",
                correct: false,
                why: "Bubble Sort doesn't need recursion.",
            },
            QuestionOption {
                id: "b",
                text: "Because it does nested passes of comparisons",
                correct: true,
                why: "Correct. Roughly n passes × ~n comparisons per pass → ~n² operations.",
            },
            QuestionOption {
                id: "c",
                text: "Because it uses extra memory",
                correct: false,
                why: "Bubble Sort is O(1) space (in-place).",
            },
        ],
        tip: None,
    },
];

pub static INSERTION_SORT_QUESTIONS: &[Question] = &[
    Question {
        id: "i1",
        prompt: "Insertion Sort grows which region as it runs?",
        options: &[
            QuestionOption {
                id: "a",
                text: "A sorted region on the left side",
                correct: true,
                why: "Yes. It keeps the left part sorted and inserts the next element into it.",
            },
            QuestionOption {
                id: "b",
                text: "A sorted region on the right side",
                correct: false,
                why: "Not typically. The common version grows sorted on the left.",
            },
            QuestionOption {
                id: "c",
                text: "No region; it randomizes elements",
                correct: false,
                why: "No. Insertion Sort builds order.",
            },
        ],
        tip: Some("Like arranging playing cards in your hand."),
    },
    Question {
        id: "i2",
        prompt: "When is Insertion Sort fastest (best case)?",
        options: &[
            QuestionOption {
                id: "a",
                text: "When the array is already sorted or nearly sorted",
                correct: true,
                why: "Exactly. Very few shifts needed → close to O(n).",
            },
            QuestionOption {
                id: "b",
                text: "When the array is reverse-sorted",
                correct: false,
                why: "That's worst-case (lots of shifts).",
            },
            QuestionOption {
                id: "c",
                text: "Always the same speed",
                correct: false,
                why: "No, its time depends heavily on how sorted the input is.",
            },
        ],
        tip: None,
    },
    Question {
        id: "i3",
        prompt: "What is the main cost in Insertion Sort?",
        options: &[
            QuestionOption {
                id: "a",
                text: "Shifting elements to make room",
                correct: true,
                why: "Correct. It often shifts a block of elements to insert one item.",
            },
            QuestionOption {
                id: "b",
                text: "Building a heap",
                correct: false,
                why: "That's Heap Sort.",
            },
            QuestionOption {
                id: "c",
                text: "Merging two sorted lists",
                correct: false,
                why: "That's Merge Sort.",
            },
        ],
        tip: None,
    },
];

pub static SELECTION_SORT_QUESTIONS: &[Question] = &[
    Question {
        id: "s1",
        prompt: "What does Selection Sort do in each pass?",
        options: &[
            QuestionOption {
                id: "a",
                text: "Find the minimum in the unsorted region and swap it into place",
                correct: true,
                why: "Yes. One minimum selected per pass.",
            },
            QuestionOption {
                id: "b",
                text: "Compare neighbors and swap many times",
                correct: false,
                why: "That's Bubble Sort.",
            },
            QuestionOption {
                id: "c",
                text: "Insert next element into sorted region by shifting",
                correct: false,
                why: "That's Insertion Sort.",
            },
        ],
        tip: None,
    },
    Question {
        id: "s2",
        prompt: "Why is Selection Sort always O(n²) comparisons?",
        options: &[
            QuestionOption {
                id: "a",
                text: "Because it must scan the remaining unsorted portion each pass",
                correct: true,
                why: "Correct. It always does a full scan to find the minimum.",
            },
            QuestionOption {
                id: "b",
                text: "Because it uses recursion",
                correct: false,
                why: "No recursion needed.",
            },
            QuestionOption {
                id: "c",
                text: "Because it is unstable",
                correct: false,
                why: "Stability is separate from time complexity.",
            },
        ],
        tip: None,
    },
    Question {
        id: "s3",
        prompt: "Selection Sort often has fewer swaps than Bubble Sort. Why?",
        options: &[
            QuestionOption {
                id: "a",
                text: "It swaps at most once per pass",
                correct: true,
                why: "Right. One swap after selecting the minimum.",
            },
            QuestionOption {
                id: "b",
                text: "It never swaps",
                correct: false,
                why: "It swaps to place the minimum each pass.",
            },
            QuestionOption {
                id: "c",
                text: "It uses extra memory to avoid swaps",
                correct: false,
                why: "No, it is in-place.",
            },
        ],
        tip: None,
    },
];

pub static BINARY_SEARCH_QUESTIONS: &[Question] = &[
    Question {
        id: "bs1",
        prompt: "Binary Search requires what condition to be correct?",
        options: &[
            QuestionOption {
                id: "a",
                text: "Array must be sorted",
                correct: true,
                why: "Correct. The halving logic only works on sorted data.",
            },
            QuestionOption {
                id: "b",
                text: "Array must have unique values",
                correct: false,
                why: "Not required. It still works (returns one matching index).",
            },
            QuestionOption {
                id: "c",
                text: "Array must be small",
                correct: false,
                why: "No, it works great on large arrays.",
            },
        ],
        tip: None,
    },
    Question {
        id: "bs2",
        prompt: "Why is Binary Search O(log n)?",
        options: &[
            QuestionOption {
                id: "a",
                text: "Because each step halves the search range",
                correct: true,
                why: "Exactly. n → n/2 → n/4 → … until 1.",
            },
            QuestionOption {
                id: "b",
                text: "Because it checks every element once",
                correct: false,
                why: "That's linear search: O(n).",
            },
            QuestionOption {
                id: "c",
                text: "Because it sorts the array first",
                correct: false,
                why: "Sorting is separate. Search itself is O(log n) once sorted.",
            },
        ],
        tip: None,
    },
    Question {
        id: "bs3",
        prompt: "If n increases from 10 to 1000, log2(n) grows from ~3 to ~10. What does that mean?",
        options: &[
            QuestionOption {
                id: "a",
                text: "Binary Search becomes ~100× slower",
                correct: false,
                why: "No. log grows slowly.",
            },
            QuestionOption {
                id: "b",
                text: "Binary Search needs only a few more steps",
                correct: true,
                why: "Correct. Even huge n only adds a small number of extra comparisons.",
            },
            QuestionOption {
                id: "c",
                text: "Binary Search stops working",
                correct: false,
                why: "It still works; it remains efficient.",
            },
        ],
        tip: Some("Logarithms grow very slowly. This is why Big-O matters."),
    },
];

pub static MOVE_ZEROS_QUESTIONS: &[Question] = &[
    Question {
        id: "z1",
        prompt: "What does the nz pointer mark in Move Zeros?",
        options: &[
            QuestionOption {
                id: "a",
                text: "The next slot a non-zero value should be written to",
                correct: true,
                why: "Yes. Everything before nz is already a kept non-zero value.",
            },
            QuestionOption {
                id: "b",
                text: "The position of the last zero seen",
                correct: false,
                why: "Zeros are never tracked individually; they end up wherever nz leaves them.",
            },
            QuestionOption {
                id: "c",
                text: "The end of the array",
                correct: false,
                why: "That is the loop bound for the read pointer, not nz.",
            },
        ],
        tip: Some("One pointer reads, the other writes."),
    },
    Question {
        id: "z2",
        prompt: "Why do the non-zero values keep their original order?",
        options: &[
            QuestionOption {
                id: "a",
                text: "They are sorted at the end",
                correct: false,
                why: "No sorting happens; order is preserved by construction.",
            },
            QuestionOption {
                id: "b",
                text: "Each one is written to nz in the order it is read",
                correct: true,
                why: "Right. The read pointer visits them left to right and nz only moves forward.",
            },
            QuestionOption {
                id: "c",
                text: "Zeros are removed from the array",
                correct: false,
                why: "Zeros are kept; they are just moved behind the non-zeros.",
            },
        ],
        tip: None,
    },
    Question {
        id: "z3",
        prompt: "How many times is each element read?",
        options: &[
            QuestionOption {
                id: "a",
                text: "Once",
                correct: true,
                why: "Correct. A single left-to-right pass, so O(n) time.",
            },
            QuestionOption {
                id: "b",
                text: "Once per zero in the array",
                correct: false,
                why: "That would make it quadratic; the two-pointer trick avoids that.",
            },
            QuestionOption {
                id: "c",
                text: "log n times",
                correct: false,
                why: "Nothing is halved here; that is Binary Search.",
            },
        ],
        tip: None,
    },
];
