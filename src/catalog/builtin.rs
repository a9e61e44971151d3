//! The built-in study catalog
//!
//! Hand-authored content tree covering the material tracked by the app.
//! Implementation paths point into the companion interview-prep sources;
//! when a path does not exist on this machine the loader falls back to a
//! canned sample (see [`super::loader`]).

use super::model::{Catalog, Category, CategoryId, Difficulty, Implementation, Problem, Resource, Topic};

impl Catalog {
    /// Build the full built-in catalog
    pub fn builtin() -> Self {
        Catalog {
            categories: vec![
                data_structures(),
                algorithms(),
                java_concepts(),
                system_design(),
                behavioral(),
            ],
            problems: problems(),
        }
    }
}

fn data_structures() -> Category {
    let mut cat = Category::new(
        CategoryId::DataStructures,
        "Fundamental data structures used in computer science and technical interviews",
    );

    cat.topics.push(
        Topic::new("ds-arrays", "Arrays", "A collection of elements stored at contiguous memory locations")
            .with_priority(1)
            .with_complexity([
                ("access", "O(1)"),
                ("search", "O(n)"),
                ("insert", "O(n)"),
                ("delete", "O(n)"),
            ])
            .with_implementation(Implementation::new(
                "impl-arrays-basic",
                "Basic Array Operations",
                "interview-prep/data_structures/arrays",
                "java",
            ))
            .with_resource(Resource::new(
                "Array Data Structure",
                "https://www.geeksforgeeks.org/array-data-structure/",
            )),
    );

    cat.topics.push(
        Topic::new(
            "ds-linked-lists",
            "Linked Lists",
            "Linear data structure where elements are not stored at contiguous locations",
        )
        .with_priority(2)
        .with_complexity([
            ("access", "O(n)"),
            ("search", "O(n)"),
            ("insert", "O(1) at head, O(n) elsewhere"),
            ("delete", "O(1) at head, O(n) elsewhere"),
        ])
        .with_implementation(Implementation::new(
            "impl-singly-linked-list",
            "Singly Linked List",
            "interview-prep/data_structures/linked_lists/SinglyLinkedList.java",
            "java",
        ))
        .with_implementation(Implementation::new(
            "impl-doubly-linked-list",
            "Doubly Linked List",
            "interview-prep/data_structures/linked_lists/DoublyLinkedList.java",
            "java",
        ))
        .with_resource(Resource::new(
            "Linked List Data Structure",
            "https://www.geeksforgeeks.org/data-structures/linked-list/",
        )),
    );

    cat.topics.push(
        Topic::new("ds-stacks", "Stacks", "Last In First Out (LIFO) data structure")
            .with_priority(2)
            .with_complexity([
                ("access", "O(n)"),
                ("search", "O(n)"),
                ("insert", "O(1) at top"),
                ("delete", "O(1) at top"),
            ])
            .with_implementation(Implementation::new(
                "impl-stack-array",
                "Stack using Array",
                "interview-prep/data_structures/stack",
                "java",
            ))
            .with_implementation(Implementation::new(
                "impl-stack-linkedlist",
                "Stack using Linked List",
                "interview-prep/data_structures/stack",
                "java",
            )),
    );

    cat.topics.push(
        Topic::new("ds-queues", "Queues", "First In First Out (FIFO) data structure")
            .with_complexity([
                ("access", "O(n)"),
                ("search", "O(n)"),
                ("insert", "O(1) at rear"),
                ("delete", "O(1) at front"),
            ])
            .with_implementation(Implementation::new(
                "impl-queue-array",
                "Queue using Array",
                "interview-prep/data_structures/queue",
                "java",
            ))
            .with_implementation(Implementation::new(
                "impl-queue-linkedlist",
                "Queue using Linked List",
                "interview-prep/data_structures/queue",
                "java",
            )),
    );

    cat.topics.push(
        Topic::new(
            "ds-trees",
            "Trees",
            "Hierarchical data structure with a root value and subtrees as children",
        )
        .with_priority(3)
        .with_complexity([
            ("access", "O(log n) average, O(n) worst"),
            ("search", "O(log n) average, O(n) worst"),
            ("insert", "O(log n) average, O(n) worst"),
            ("delete", "O(log n) average, O(n) worst"),
        ])
        .with_implementation(Implementation::new(
            "impl-binary-tree",
            "Binary Tree",
            "interview-prep/data_structures/trees",
            "java",
        ))
        .with_implementation(Implementation::new(
            "impl-binary-search-tree",
            "Binary Search Tree",
            "interview-prep/data_structures/trees/BinarySearchTree.java",
            "java",
        ))
        .with_implementation(Implementation::new(
            "impl-avl-tree",
            "AVL Tree",
            "interview-prep/data_structures/trees/AVLTree.java",
            "java",
        )),
    );

    cat.topics.push(
        Topic::new("ds-heaps", "Heaps", "A special tree-based data structure that satisfies the heap property")
            .with_complexity([
                ("findMin", "O(1)"),
                ("insert", "O(log n)"),
                ("deleteMin", "O(log n)"),
                ("buildHeap", "O(n)"),
            ])
            .with_implementation(Implementation::new(
                "impl-binary-heap",
                "Binary Heap",
                "interview-prep/data_structures/heap",
                "java",
            ))
            .with_implementation(Implementation::new(
                "impl-priority-queue",
                "Priority Queue",
                "interview-prep/data_structures/heap",
                "java",
            )),
    );

    cat.topics.push(
        Topic::new("ds-hash-tables", "Hash Tables", "Data structure that implements an associative array")
            .with_priority(2)
            .with_complexity([
                ("search", "O(1) average, O(n) worst"),
                ("insert", "O(1) average, O(n) worst"),
                ("delete", "O(1) average, O(n) worst"),
            ])
            .with_implementation(Implementation::new(
                "impl-hash-table",
                "Hash Table Implementation",
                "interview-prep/data_structures/hash_tables",
                "java",
            ))
            .with_implementation(Implementation::new(
                "impl-lru-cache",
                "LRU Cache",
                "interview-prep/data_structures/hash_tables/LRUCache.java",
                "java",
            )),
    );

    cat.topics.push(
        Topic::new("ds-graphs", "Graphs", "Non-linear data structure consisting of vertices and edges")
            .with_complexity([
                ("BFS", "O(V + E)"),
                ("DFS", "O(V + E)"),
                ("dijkstra", "O(E log V)"),
            ])
            .with_implementation(Implementation::new(
                "impl-graph-adjacency-list",
                "Graph (Adjacency List)",
                "interview-prep/data_structures/graphs/Graph.java",
                "java",
            ))
            .with_implementation(Implementation::new(
                "impl-graph-adjacency-matrix",
                "Graph (Adjacency Matrix)",
                "interview-prep/data_structures/graphs",
                "java",
            )),
    );

    cat.topics.push(
        Topic::new("ds-trie", "Trie", "Tree-like data structure that stores a dynamic set of strings")
            .with_complexity([
                ("search", "O(m) where m is key length"),
                ("insert", "O(m) where m is key length"),
                ("delete", "O(m) where m is key length"),
            ])
            .with_implementation(Implementation::new(
                "impl-trie",
                "Trie Implementation",
                "interview-prep/data_structures/tries/Trie.java",
                "java",
            )),
    );

    cat.topics.push(
        Topic::new("ds-segment-tree", "Segment Tree", "A tree data structure for storing intervals or segments")
            .with_complexity([
                ("construction", "O(n)"),
                ("query", "O(log n)"),
                ("update", "O(log n)"),
            ])
            .with_implementation(Implementation::new(
                "impl-segment-tree",
                "Segment Tree",
                "interview-prep/data_structures/trees/SegmentTree.java",
                "java",
            )),
    );

    cat.topics.push(
        Topic::new(
            "ds-union-find",
            "Union Find (Disjoint Set)",
            "A data structure that keeps track of elements partitioned into disjoint sets",
        )
        .with_complexity([
            ("find", "O(α(n)) almost constant"),
            ("union", "O(α(n)) almost constant"),
        ])
        .with_implementation(Implementation::new(
            "impl-union-find",
            "Union Find Implementation",
            "interview-prep/data_structures/disjoint_set/UnionFind.java",
            "java",
        )),
    );

    cat
}

fn algorithms() -> Category {
    let mut cat = Category::new(
        CategoryId::Algorithms,
        "Common algorithms used in computer science and technical interviews",
    );

    cat.topics.push(
        Topic::new("algo-sorting", "Sorting Algorithms", "Algorithms for arranging elements in a specific order")
            .with_priority(2)
            .with_complexity([
                ("bubbleSort", "O(n²)"),
                ("selectionSort", "O(n²)"),
                ("insertionSort", "O(n²)"),
                ("mergeSort", "O(n log n)"),
                ("quickSort", "O(n log n) average, O(n²) worst"),
                ("heapSort", "O(n log n)"),
            ])
            .with_implementation(Implementation::new(
                "impl-bubble-sort",
                "Bubble Sort",
                "interview-prep/algorithms/sort",
                "java",
            ))
            .with_implementation(Implementation::new(
                "impl-quick-sort",
                "Quick Sort",
                "interview-prep/algorithms/sort/QuickSort.java",
                "java",
            )),
    );

    cat.topics.push(
        Topic::new("algo-searching", "Searching Algorithms", "Algorithms for finding elements in a data structure")
            .with_priority(2)
            .with_complexity([("linearSearch", "O(n)"), ("binarySearch", "O(log n)")])
            .with_implementation(Implementation::new(
                "impl-binary-search",
                "Binary Search",
                "interview-prep/algorithms/search/BinarySearch.java",
                "java",
            )),
    );

    cat.topics.push(
        Topic::new("algo-graph", "Graph Algorithms", "Algorithms for traversing and processing graphs")
            .with_complexity([
                ("BFS", "O(V + E)"),
                ("DFS", "O(V + E)"),
                ("dijkstra", "O(E log V)"),
                ("bellmanFord", "O(V·E)"),
                ("floydWarshall", "O(V³)"),
            ])
            .with_implementation(Implementation::new(
                "impl-dijkstra",
                "Dijkstra's Algorithm",
                "interview-prep/algorithms/graph/DijkstraAlgorithm.java",
                "java",
            ))
            .with_implementation(Implementation::new(
                "impl-kruskal",
                "Kruskal's MST Algorithm",
                "interview-prep/algorithms/graph/KruskalMST.java",
                "java",
            ))
            .with_implementation(Implementation::new(
                "impl-topological-sort",
                "Topological Sort",
                "interview-prep/algorithms/graph/TopologicalSort.java",
                "java",
            )),
    );

    cat.topics.push(
        Topic::new(
            "algo-dp",
            "Dynamic Programming",
            "Technique for solving complex problems by breaking them down into simpler subproblems",
        )
        .with_complexity([("varies", "Depends on the problem")])
        .with_implementation(Implementation::new(
            "impl-knapsack",
            "Knapsack Problem",
            "interview-prep/algorithms/dynamic_programming/KnapsackProblem.java",
            "java",
        ))
        .with_implementation(Implementation::new(
            "impl-lcs",
            "Longest Common Subsequence",
            "interview-prep/algorithms/dynamic_programming/LongestCommonSubsequence.java",
            "java",
        ))
        .with_implementation(Implementation::new(
            "impl-edit-distance",
            "Edit Distance",
            "interview-prep/algorithms/dynamic_programming/EditDistance.java",
            "java",
        )),
    );

    cat.topics.push(
        Topic::new("algo-string", "String Algorithms", "Algorithms for string processing and pattern matching")
            .with_complexity([
                ("naivePatternMatching", "O(n·m)"),
                ("KMP", "O(n+m)"),
                ("rabinKarp", "O(n+m) average, O(n·m) worst"),
            ])
            .with_implementation(Implementation::new(
                "impl-kmp",
                "KMP Algorithm",
                "interview-prep/algorithms/string/KMPStringMatching.java",
                "java",
            ))
            .with_implementation(Implementation::new(
                "impl-rabin-karp",
                "Rabin-Karp Algorithm",
                "interview-prep/algorithms/string/RabinKarpStringMatching.java",
                "java",
            )),
    );

    cat.topics.push(
        Topic::new(
            "algo-backtracking",
            "Backtracking",
            "Algorithm for finding all solutions by exploring all potential candidates",
        )
        .with_complexity([("varies", "Usually exponential")])
        .with_implementation(Implementation::new(
            "impl-n-queens",
            "N-Queens Problem",
            "interview-prep/algorithms/backtracking/NQueens.java",
            "java",
        )),
    );

    cat.topics.push(
        Topic::new(
            "algo-greedy",
            "Greedy Algorithms",
            "Algorithms that make the locally optimal choice at each stage",
        )
        .with_complexity([("varies", "Depends on the problem")]),
    );

    cat.topics.push(
        Topic::new(
            "algo-divide-conquer",
            "Divide and Conquer",
            "Technique of breaking a problem into subproblems, solving them, and combining the results",
        )
        .with_complexity([("varies", "Typically O(n log n)")]),
    );

    cat
}

fn java_concepts() -> Category {
    let mut cat = Category::new(
        CategoryId::JavaConcepts,
        "Core Java concepts and features important for technical interviews",
    );

    cat.topics.push(
        Topic::new("java-oop", "Object-Oriented Programming", "Core principles of OOP in Java")
            .with_priority(2)
            .with_implementation(Implementation::new(
                "impl-java-classes",
                "Classes and Objects",
                "interview-prep/java/core_concepts/ClassesAndObjects.java",
                "java",
            ))
            .with_implementation(Implementation::new(
                "impl-java-inheritance",
                "Inheritance",
                "interview-prep/java/core_concepts/InheritanceExamples.java",
                "java",
            ))
            .with_implementation(Implementation::new(
                "impl-java-polymorphism",
                "Polymorphism",
                "interview-prep/java/core_concepts/PolymorphismExamples.java",
                "java",
            ))
            .with_implementation(Implementation::new(
                "impl-java-interfaces",
                "Interfaces and Abstract Classes",
                "interview-prep/java/core_concepts/InterfacesAndAbstractClasses.java",
                "java",
            ))
            .with_implementation(Implementation::new(
                "impl-java-solid",
                "SOLID Principles",
                "interview-prep/java/core_concepts/SOLIDPrinciples.java",
                "java",
            )),
    );

    cat.topics.push(Topic::new(
        "java-collections",
        "Collections Framework",
        "Java Collections Framework and data structures",
    ));

    cat.topics.push(
        Topic::new("java-concurrency", "Concurrency", "Multithreading and concurrency in Java")
            .with_implementation(Implementation::new(
                "impl-java-concurrency",
                "Concurrency Examples",
                "interview-prep/java/concurrency/ConcurrencyExamples.java",
                "java",
            )),
    );

    cat.topics.push(
        Topic::new("java-design-patterns", "Design Patterns", "Common design patterns implemented in Java")
            .with_implementation(Implementation::new(
                "impl-java-design-patterns",
                "Design Patterns",
                "interview-prep/java/design_patterns/DesignPatterns.java",
                "java",
            )),
    );

    cat.topics.push(Topic::new("java-exceptions", "Exception Handling", "Exception handling in Java"));
    cat.topics.push(Topic::new("java-generics", "Generics", "Generic programming in Java"));

    cat
}

fn system_design() -> Category {
    let mut cat = Category::new(
        CategoryId::SystemDesign,
        "System design concepts and examples for technical interviews",
    );

    cat.topics.push(
        Topic::new("sd-basics", "System Design Basics", "Fundamental concepts in system design")
            .with_priority(3)
            .with_implementation(Implementation::new(
                "impl-sd-patterns",
                "System Design Patterns",
                "interview-prep/system_design/SystemDesignPatterns.md",
                "markdown",
            )),
    );

    cat.topics.push(Topic::new(
        "sd-scalability",
        "Scalability",
        "Horizontal and vertical scaling, load balancing",
    ));
    cat.topics.push(Topic::new("sd-microservices", "Microservices", "Microservices architecture and design"));
    cat.topics.push(Topic::new(
        "sd-distributed",
        "Distributed Systems",
        "Distributed systems concepts and design",
    ));
    cat.topics.push(Topic::new("sd-databases", "Database Design", "SQL, NoSQL, sharding, replication"));
    cat.topics.push(Topic::new("sd-caching", "Caching", "Caching strategies and implementations"));
    cat.topics.push(Topic::new("sd-examples", "System Design Examples", "Examples of system design problems"));

    cat
}

fn behavioral() -> Category {
    let mut cat = Category::new(
        CategoryId::Behavioral,
        "Behavioral interview preparation and common questions",
    );

    cat.topics.push(
        Topic::new(
            "behavioral-prep",
            "Behavioral Interview Preparation",
            "Preparation guide for behavioral interviews",
        )
        .with_implementation(Implementation::new(
            "impl-behavioral-prep",
            "Behavioral Interview Prep",
            "interview-prep/others/BehavioralInterviewPrep.md",
            "markdown",
        )),
    );

    cat.topics.push(Topic::new(
        "behavioral-star",
        "STAR Method",
        "Situation, Task, Action, Result framework for answering behavioral questions",
    ));

    cat
}

fn problems() -> Vec<Problem> {
    vec![
        Problem::new("lc-two-sum", "Two Sum", Difficulty::Easy, "https://leetcode.com/problems/two-sum/")
            .with_tags(["Array", "Hash Table"]),
        Problem::new(
            "lc-add-two-numbers",
            "Add Two Numbers",
            Difficulty::Medium,
            "https://leetcode.com/problems/add-two-numbers/",
        )
        .with_tags(["Linked List", "Math"]),
        Problem::new(
            "lc-longest-substring",
            "Longest Substring Without Repeating Characters",
            Difficulty::Medium,
            "https://leetcode.com/problems/longest-substring-without-repeating-characters/",
        )
        .with_tags(["String", "Sliding Window"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_all_topic_categories() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.categories.len(), 5);
        for id in [
            CategoryId::DataStructures,
            CategoryId::Algorithms,
            CategoryId::JavaConcepts,
            CategoryId::SystemDesign,
            CategoryId::Behavioral,
        ] {
            assert!(catalog.category(id).is_some(), "missing category {id}");
        }
        // LeetCode holds problems, not topics
        assert!(catalog.category(CategoryId::Leetcode).is_none());
        assert!(!catalog.problems.is_empty());
    }

    #[test]
    fn builtin_topic_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut seen = std::collections::HashSet::new();
        for (_, topic) in catalog.all_topics() {
            assert!(seen.insert(topic.id.clone()), "duplicate topic id: {}", topic.id);
        }
    }

    #[test]
    fn builtin_implementation_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut seen = std::collections::HashSet::new();
        for (_, topic) in catalog.all_topics() {
            for implementation in &topic.implementations {
                assert!(
                    seen.insert(implementation.id.clone()),
                    "duplicate implementation id: {}",
                    implementation.id
                );
            }
        }
    }

    #[test]
    fn builtin_lookups_resolve() {
        let catalog = Catalog::builtin();
        let (cat, _) = catalog.find_topic("ds-linked-lists").unwrap();
        assert_eq!(cat, CategoryId::DataStructures);
        assert!(catalog.find_implementation("impl-singly-linked-list").is_some());
        assert!(catalog.find_problem("lc-two-sum").is_some());
    }
}
